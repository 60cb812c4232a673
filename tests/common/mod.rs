#![allow(dead_code)]

use std::time::Duration;

use chrono::{DateTime, Utc};
use httpmock::MockServer;
use market_digest::quote::TraditionalMetrics;
use market_digest::{
    Article, AssetClass, AssetSpec, DigestClientBuilder, Quote, QuoteExtension, QuoteSource,
    RetryConfig, Sentiment,
};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Builder with every provider pointed at `server` and retries off, so each
/// mock is hit exactly once per fetch.
pub fn builder_for(server: &MockServer) -> DigestClientBuilder {
    let base = server.base_url();
    DigestClientBuilder::default()
        .base_chart(Url::parse(&format!("{base}/v8/finance/chart/")).unwrap())
        .base_alpha_vantage(Url::parse(&format!("{base}/query")).unwrap())
        .base_coingecko(Url::parse(&format!("{base}/api/v3/")).unwrap())
        .base_newsapi(Url::parse(&format!("{base}/v2/")).unwrap())
        .timeout(Duration::from_secs(5))
        .retry_config(RetryConfig::disabled())
}

pub fn equity(symbol: &str, name: &str) -> AssetSpec {
    AssetSpec::new(symbol, name, AssetClass::Equity)
}

pub fn crypto(symbol: &str, name: &str) -> AssetSpec {
    AssetSpec::new(symbol, name, AssetClass::Crypto)
}

/// A quote with fixed prices and the given change, for ranking tests.
pub fn quote(symbol: &str, asset_class: AssetClass, change_percent: f64) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: format!("{symbol} Holdings"),
        asset_class,
        industry: None,
        price: 100.0,
        open: 100.0,
        high: 100.0,
        low: 100.0,
        volume: 1_000.0,
        change: change_percent,
        change_percent,
        source: QuoteSource::Synthetic,
        extension: QuoteExtension::Traditional(TraditionalMetrics::default()),
        news: Vec::new(),
        sentiment: Sentiment::default(),
        headline: None,
    }
}

pub fn hours_ago(now: DateTime<Utc>, hours: i64) -> String {
    market_digest::news::format_timestamp(now - chrono::Duration::hours(hours))
}

pub fn days_ago(now: DateTime<Utc>, days: i64) -> String {
    market_digest::news::format_timestamp(now - chrono::Duration::days(days))
}

pub fn article(title: &str, published_at: &str) -> Article {
    Article::new(title, published_at)
}
