/// Mock fixture data for testing and development
///
/// Deterministic feeds used by unit tests and the `--mock` development mode. The standings mirror a plausible mid-season table.
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::data_provider::F1DataProvider;
use crate::error::{FetchError, FetchResult};
use crate::types::{ConstructorStanding, DriverStanding, NewsItem};

pub fn create_mock_news() -> Vec<NewsItem> {
    vec![
        news(
            "Verstappen takes pole in Suzuka",
            "The championship leader edged out both McLarens in a tense final run.",
            "Sat, 06 Apr 2024 08:15:00 +0000",
            "https://example.com/news/suzuka-pole",
            Some("bbc.co.uk"),
        ),
        news(
            "Ferrari bring upgraded floor to Japan",
            "<p>The Scuderia's new floor aims to reduce <b>bouncing</b> in high-speed corners.</p>",
            "Fri, 05 Apr 2024 14:30:00 +0000",
            "https://example.com/news/ferrari-floor",
            Some("the-race.com"),
        ),
        news(
            "Sprint format tweaks confirmed for 2024",
            "Parc ferme rules change so teams can adjust set-up before qualifying.",
            "2024-04-04T10:00:00Z",
            "https://example.com/news/sprint-format",
            None,
        ),
    ]
}

pub fn create_mock_driver_standings() -> Vec<DriverStanding> {
    vec![
        driver(1, "Max Verstappen", "Red Bull", "Dutch", 77.0, 3),
        driver(2, "Sergio Perez", "Red Bull", "Mexican", 64.0, 0),
        driver(3, "Charles Leclerc", "Ferrari", "Monegasque", 59.0, 0),
        driver(4, "Carlos Sainz", "Ferrari", "Spanish", 55.0, 1),
        driver(5, "Lando Norris", "McLaren", "British", 37.0, 0),
        driver(6, "Oscar Piastri", "McLaren", "Australian", 32.0, 0),
    ]
}

pub fn create_mock_constructor_standings() -> Vec<ConstructorStanding> {
    vec![
        constructor(1, "Red Bull", "Austrian", 141.0, 3),
        constructor(2, "Ferrari", "Italian", 120.0, 1),
        constructor(3, "McLaren", "British", 69.0, 0),
        constructor(4, "Mercedes", "German", 34.0, 0),
    ]
}

fn news(title: &str, summary: &str, published: &str, link: &str, source: Option<&str>) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        summary: summary.to_string(),
        published: published.to_string(),
        link: link.to_string(),
        source: source.map(str::to_string),
    }
}

pub fn driver(
    position: u32,
    name: &str,
    constructor: &str,
    nationality: &str,
    points: f64,
    wins: u32,
) -> DriverStanding {
    DriverStanding {
        position,
        name: name.to_string(),
        constructor: constructor.to_string(),
        nationality: nationality.to_string(),
        points,
        wins,
    }
}

pub fn constructor(position: u32, name: &str, nationality: &str, points: f64, wins: u32) -> ConstructorStanding {
    ConstructorStanding {
        position,
        name: name.to_string(),
        nationality: nationality.to_string(),
        points,
        wins,
    }
}

/// In-memory `F1DataProvider` with canned responses and call counters
pub struct MockClient {
    pub news: FetchResult<Vec<NewsItem>>,
    pub drivers: FetchResult<Vec<DriverStanding>>,
    pub constructors: FetchResult<Vec<ConstructorStanding>>,
    news_calls: AtomicUsize,
    driver_calls: AtomicUsize,
    constructor_calls: AtomicUsize,
}

impl Default for MockClient {
    fn default() -> Self {
        Self {
            news: Ok(create_mock_news()),
            drivers: Ok(create_mock_driver_standings()),
            constructors: Ok(create_mock_constructor_standings()),
            news_calls: AtomicUsize::new(0),
            driver_calls: AtomicUsize::new(0),
            constructor_calls: AtomicUsize::new(0),
        }
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every endpoint fails at the transport level
    pub fn failing() -> Self {
        let err = FetchError::Network("connection refused".to_string());
        Self {
            news: Err(err.clone()),
            drivers: Err(err.clone()),
            constructors: Err(err),
            ..Self::default()
        }
    }

    /// A client whose every endpoint returns an empty list
    pub fn empty() -> Self {
        Self {
            news: Ok(Vec::new()),
            drivers: Ok(Vec::new()),
            constructors: Ok(Vec::new()),
            ..Self::default()
        }
    }

    pub fn news_calls(&self) -> usize {
        self.news_calls.load(Ordering::SeqCst)
    }

    pub fn driver_calls(&self) -> usize {
        self.driver_calls.load(Ordering::SeqCst)
    }

    pub fn constructor_calls(&self) -> usize {
        self.constructor_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl F1DataProvider for MockClient {
    async fn news(&self) -> FetchResult<Vec<NewsItem>> {
        self.news_calls.fetch_add(1, Ordering::SeqCst);
        self.news.clone()
    }

    async fn driver_standings(&self) -> FetchResult<Vec<DriverStanding>> {
        self.driver_calls.fetch_add(1, Ordering::SeqCst);
        self.drivers.clone()
    }

    async fn constructor_standings(&self) -> FetchResult<Vec<ConstructorStanding>> {
        self.constructor_calls.fetch_add(1, Ordering::SeqCst);
        self.constructors.clone()
    }
}
