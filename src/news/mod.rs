//! Per-symbol news chain: NewsAPI (keyed) → synthetic templates.

mod api;
mod model;
mod relevance;
mod sentiment;
mod synthetic;
mod wire;

pub use model::{Article, TIMESTAMP_FORMAT, format_timestamp, normalize_timestamp};
pub use relevance::{best_headline, relevance_score};
pub use sentiment::{Sentiment, SentimentLabel};
pub use synthetic::synthetic_news;

use crate::core::{AssetSpec, DigestClient};

/// Fetch up to `limit` articles for `spec`.
///
/// Never returns an empty list: without a key, or when the provider fails or
/// has nothing usable, the two synthetic template articles are returned.
pub async fn fetch_news(client: &DigestClient, spec: &AssetSpec, limit: usize) -> Vec<Article> {
    if client.has_newsapi() {
        tracing::debug!(symbol = %spec.symbol, provider = "newsapi", "fetching news");
        match api::fetch_newsapi(client, spec, limit).await {
            Ok(articles) => return articles,
            Err(e) => {
                tracing::warn!(symbol = %spec.symbol, provider = "newsapi", error = %e, "news provider failed, falling back");
            }
        }
    }

    synthetic_news(spec, chrono::Utc::now())
}
