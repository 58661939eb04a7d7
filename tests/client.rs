//! End-to-end tests of the HTTP client against a local server

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use f1::data_provider::{Client, F1DataProvider};
use f1::error::FetchError;

async fn serve(router: Router) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Client::new(&format!("http://{}/", addr))
}

fn news_json() -> Value {
    json!([
        {
            "title": "Verstappen takes pole in Suzuka",
            "summary": "The championship leader edged out both McLarens.",
            "published": "Sat, 06 Apr 2024 08:15:00 +0000",
            "link": "https://example.com/news/suzuka-pole",
            "source": "bbc.co.uk"
        },
        {
            "title": "Sprint format tweaks confirmed",
            "summary": "",
            "published": "2024-04-04T10:00:00Z",
            "link": "https://example.com/news/sprint-format",
            "source": ""
        }
    ])
}

#[tokio::test]
async fn test_news_bare_array() {
    let client = serve(Router::new().route("/api/news", get(|| async { Json(news_json()) }))).await;

    let news = client.news().await.unwrap();
    assert_eq!(news.len(), 2);
    assert_eq!(news[0].title, "Verstappen takes pole in Suzuka");
    assert_eq!(news[0].source.as_deref(), Some("bbc.co.uk"));
    assert_eq!(news[1].source, None);
}

#[tokio::test]
async fn test_driver_standings_with_string_numbers() {
    let router = Router::new().route(
        "/api/driver-standings",
        get(|| async {
            Json(json!([
                {
                    "position": "1",
                    "name": "Max Verstappen",
                    "constructor": "Red Bull",
                    "nationality": "Dutch",
                    "points": "77",
                    "wins": "3"
                },
                {
                    "position": 2,
                    "name": "Sergio Perez",
                    "constructor": "Red Bull",
                    "nationality": "Mexican",
                    "points": 64.5,
                    "wins": 0
                }
            ]))
        }),
    );
    let client = serve(router).await;

    let standings = client.driver_standings().await.unwrap();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].position, 1);
    assert_eq!(standings[0].points, 77.0);
    assert_eq!(standings[0].wins, 3);
    assert_eq!(standings[1].points, 64.5);
}

#[tokio::test]
async fn test_constructor_standings_in_envelope() {
    let router = Router::new().route(
        "/api/constructor-standings",
        get(|| async {
            Json(json!({
                "items": [
                    { "position": "1", "name": "Red Bull", "nationality": "Austrian", "points": "141", "wins": "3" }
                ]
            }))
        }),
    );
    let client = serve(router).await;

    let standings = client.constructor_standings().await.unwrap();
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].name, "Red Bull");
}

#[tokio::test]
async fn test_empty_list() {
    let client = serve(Router::new().route("/api/news", get(|| async { Json(json!([])) }))).await;
    assert!(client.news().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_page_is_decode_error() {
    let router = Router::new().route(
        "/api/news",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "<html><body>Internal Server Error</body></html>",
            )
        }),
    );
    let client = serve(router).await;

    assert!(matches!(client.news().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_missing_route_is_decode_error() {
    let client = serve(Router::new()).await;
    assert!(matches!(client.driver_standings().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let router = Router::new().route(
        "/api/driver-standings",
        get(|| async { Json(json!({ "error": "rate limited" })) }),
    );
    let client = serve(router).await;

    assert!(matches!(client.driver_standings().await, Err(FetchError::Decode(_))));
}
