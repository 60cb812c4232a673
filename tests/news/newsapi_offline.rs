use httpmock::Method::GET;
use market_digest::fetch_news;

use crate::common::{builder_for, equity, setup_server};

const EVERYTHING_APPLE: &str = r#"{
  "status": "ok",
  "totalResults": 5,
  "articles": [
    {
      "source": {"id": "reuters", "name": "Reuters"},
      "title": "Apple beats earnings expectations",
      "description": "Record services revenue.",
      "url": "https://example.com/a1",
      "publishedAt": "2026-10-15T14:30:00Z"
    },
    {
      "source": {"id": null, "name": "Bloomberg"},
      "title": "   ",
      "description": "No headline on this one.",
      "url": "https://example.com/a2",
      "publishedAt": "2026-10-15T13:00:00Z"
    },
    {
      "source": {"name": "CNBC"},
      "title": "Apple shares slip after supplier warning",
      "description": null,
      "url": "https://example.com/a3",
      "publishedAt": "2026-10-15T12:00:00+02:00"
    },
    {
      "source": {"name": "WSJ"},
      "title": "What Apple's event means for investors",
      "url": "https://example.com/a4",
      "publishedAt": "2026-10-14T09:15:00.123Z"
    },
    {
      "source": {"name": "FT"},
      "title": "Apple in talks over new chip deal",
      "url": "https://example.com/a5",
      "publishedAt": "2026-10-13T08:00:00Z"
    }
  ]
}"#;

#[tokio::test]
async fn newsapi_articles_are_normalized_and_truncated() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param_exists("q")
            .query_param("language", "en")
            .query_param("sortBy", "publishedAt")
            .query_param("apiKey", "news-key");
        then.status(200).body(EVERYTHING_APPLE);
    });

    let client = builder_for(&server).newsapi_key("news-key").build().unwrap();
    let articles = fetch_news(&client, &equity("AAPL", "Apple Inc."), 3).await;
    mock.assert();

    assert_eq!(articles.len(), 3);
    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Apple beats earnings expectations",
            "Apple shares slip after supplier warning",
            "What Apple's event means for investors",
        ]
    );

    assert_eq!(articles[0].source, "Reuters");
    assert_eq!(articles[0].url, "https://example.com/a1");
    assert_eq!(articles[0].published_at, "2026-10-15T14:30:00Z");
    // offsets are folded into UTC
    assert_eq!(articles[1].published_at, "2026-10-15T10:00:00Z");
    assert_eq!(articles[1].description, "");
    assert_eq!(articles[2].published_at, "2026-10-14T09:15:00Z");
    assert!(articles.iter().all(|a| a.symbol.as_deref() == Some("AAPL")));
}

#[tokio::test]
async fn newsapi_error_status_falls_back_to_synthetic() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(
            r#"{"status":"error","code":"rateLimited","message":"You have made too many requests recently."}"#,
        );
    });

    let client = builder_for(&server).newsapi_key("news-key").build().unwrap();
    let articles = fetch_news(&client, &equity("TSLA", "Tesla"), 3).await;

    mock.assert();
    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.source == "Market Digest"));
}

#[tokio::test]
async fn newsapi_http_failure_falls_back_to_synthetic() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401).body(r#"{"status":"error","code":"apiKeyInvalid"}"#);
    });

    let client = builder_for(&server).newsapi_key("bad-key").build().unwrap();
    let articles = fetch_news(&client, &equity("AMZN", "Amazon"), 3).await;

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.symbol.as_deref() == Some("AMZN")));
}

#[tokio::test]
async fn newsapi_not_called_without_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(EVERYTHING_APPLE);
    });

    let client = builder_for(&server).build().unwrap();
    let articles = fetch_news(&client, &equity("AAPL", "Apple Inc."), 3).await;

    mock.assert_hits(0);
    assert_eq!(articles.len(), 2);
    assert!(articles[0].title.contains("AAPL"));
}

#[tokio::test]
async fn newsapi_only_untitled_articles_falls_back() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).body(
            r#"{"status":"ok","articles":[{"title":"","publishedAt":"2026-10-15T10:00:00Z"},{"title":null}]}"#,
        );
    });

    let client = builder_for(&server).newsapi_key("news-key").build().unwrap();
    let articles = fetch_news(&client, &equity("META", "Meta Platforms"), 3).await;

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.has_title()));
}
