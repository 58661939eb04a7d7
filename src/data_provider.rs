/// Trait for providing dashboard data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchResult;
use crate::types::{ConstructorStanding, DriverStanding, ListPayload, NewsItem};

pub const NEWS_PATH: &str = "/api/news";
pub const DRIVER_STANDINGS_PATH: &str = "/api/driver-standings";
pub const CONSTRUCTOR_STANDINGS_PATH: &str = "/api/constructor-standings";

/// Source of the three panel feeds, implemented by both `Client` and `MockClient`
#[async_trait]
pub trait F1DataProvider: Send + Sync {
    /// Latest headlines, in the order the server ranks them
    async fn news(&self) -> FetchResult<Vec<NewsItem>>;

    /// Drivers' championship table
    async fn driver_standings(&self) -> FetchResult<Vec<DriverStanding>>;

    /// Constructors' championship table
    async fn constructor_standings(&self) -> FetchResult<Vec<ConstructorStanding>>;
}

/// HTTP client for the dashboard JSON API
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a list endpoint and decode its body
    ///
    /// The status code is not checked: an error page is not JSON and fails decoding.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> FetchResult<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        debug!("HTTP: GET {} -> {}", url, response.status());

        let body = response.bytes().await?;
        let payload: ListPayload<T> = serde_json::from_slice(&body)?;
        Ok(payload.into_items())
    }
}

#[async_trait]
impl F1DataProvider for Client {
    async fn news(&self) -> FetchResult<Vec<NewsItem>> {
        self.get_list(NEWS_PATH).await
    }

    async fn driver_standings(&self) -> FetchResult<Vec<DriverStanding>> {
        self.get_list(DRIVER_STANDINGS_PATH).await
    }

    async fn constructor_standings(&self) -> FetchResult<Vec<ConstructorStanding>> {
        self.get_list(CONSTRUCTOR_STANDINGS_PATH).await
    }
}
