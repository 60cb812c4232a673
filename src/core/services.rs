use std::future::Future;
use std::pin::Pin;

use crate::core::{AssetSpec, DigestClient, DigestError};
use crate::news::Article;
use crate::quote::Quote;

/// Boxed future returned by [`MarketDataService`] methods.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, DigestError>> + Send + 'a>>;

/// A source of quotes and per-asset news.
///
/// The aggregation step is generic over this trait so it can fan work out
/// without knowing which providers sit behind it. It is implemented by
/// [`DigestClient`], whose fetch chains always succeed thanks to synthetic
/// fallbacks; other implementations may fail, and the orchestrator isolates
/// those failures per asset.
pub trait MarketDataService: Send + Sync {
    /// Fetch a normalized quote for one asset.
    fn fetch_quote<'a>(&'a self, spec: &'a AssetSpec) -> ServiceFuture<'a, Quote>;

    /// Fetch up to `limit` recent articles for one asset.
    fn fetch_news<'a>(
        &'a self,
        spec: &'a AssetSpec,
        limit: usize,
    ) -> ServiceFuture<'a, Vec<Article>>;
}

impl MarketDataService for DigestClient {
    fn fetch_quote<'a>(&'a self, spec: &'a AssetSpec) -> ServiceFuture<'a, Quote> {
        Box::pin(async move { Ok(crate::quote::fetch_quote(self, spec).await) })
    }

    fn fetch_news<'a>(
        &'a self,
        spec: &'a AssetSpec,
        limit: usize,
    ) -> ServiceFuture<'a, Vec<Article>> {
        Box::pin(async move { Ok(crate::news::fetch_news(self, spec, limit).await) })
    }
}
