//! Concurrent fan-out of quote and news fetches across a watchlist.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::config::DigestConfig;
use crate::core::{AssetSpec, DigestError, MarketDataService, Watchlist};
use crate::quote::Quote;
use crate::recency::filter_recent_at;

/// Quote, then news, for one asset. News failures leave the quote without articles.
async fn fetch_asset<S>(
    service: &S,
    spec: &AssetSpec,
    news_limit: usize,
    window_days: i64,
    now: DateTime<Utc>,
) -> Result<Quote, DigestError>
where
    S: MarketDataService + ?Sized,
{
    let quote = service.fetch_quote(spec).await?;

    let news = match service.fetch_news(spec, news_limit).await {
        Ok(articles) => filter_recent_at(&articles, window_days, now),
        Err(e) => {
            tracing::warn!(symbol = %spec.symbol, error = %e, "news fetch failed, attaching none");
            Vec::new()
        }
    };

    Ok(quote.with_news(news))
}

/// Fetch every non-comment asset concurrently and attach its filtered news.
///
/// Each asset runs in its own spawned task. A task that errors or panics is
/// logged and its asset dropped; siblings are unaffected. Output follows
/// watchlist order, and a symbol listed twice is fetched once.
pub async fn aggregate_at<S>(
    service: Arc<S>,
    watchlist: &Watchlist,
    config: &DigestConfig,
    now: DateTime<Utc>,
) -> Vec<Quote>
where
    S: MarketDataService + 'static,
{
    let mut seen = HashSet::new();
    let specs: Vec<AssetSpec> = watchlist
        .assets()
        .filter(|a| seen.insert(a.symbol.clone()))
        .cloned()
        .collect();

    let news_limit = config.news_per_symbol;
    let window_days = config.recency_days;

    let (symbols, handles): (Vec<String>, Vec<_>) = specs
        .into_iter()
        .map(|spec| {
            let svc = Arc::clone(&service);
            let symbol = spec.symbol.clone();
            let handle = tokio::spawn(async move {
                fetch_asset(svc.as_ref(), &spec, news_limit, window_days, now).await
            });
            (symbol, handle)
        })
        .unzip();

    let requested = symbols.len();
    let joined = join_all(handles).await;

    let quotes: Vec<Quote> = symbols
        .into_iter()
        .zip(joined)
        .filter_map(|(symbol, res)| match res.map_err(DigestError::from) {
            Ok(Ok(quote)) => Some(quote),
            Ok(Err(e)) | Err(e) => {
                tracing::error!(symbol = %symbol, error = %e, "asset fetch failed, dropping from digest");
                None
            }
        })
        .collect();

    tracing::info!(requested, fetched = quotes.len(), "aggregation complete");
    quotes
}

/// [`aggregate_at`] stamped with the current time.
pub async fn aggregate<S>(service: Arc<S>, watchlist: &Watchlist, config: &DigestConfig) -> Vec<Quote>
where
    S: MarketDataService + 'static,
{
    aggregate_at(service, watchlist, config, Utc::now()).await
}
