//! market-digest: aggregation and ranking pipeline for a daily markets digest.
//!
//! Quotes come from per-asset-class provider chains (Yahoo chart, Alpha Vantage,
//! CoinGecko) and news from NewsAPI, each ending in a synthetic generator so an
//! outage degrades the digest instead of failing it. The collected data is
//! filtered by recency, ranked into top movers, and bucketed into hero news
//! categories.
//!
//! ```no_run
//! use std::sync::Arc;
//! use market_digest::{AssetClass, AssetSpec, DigestClientBuilder, DigestConfig, Watchlist, build_digest};
//!
//! # async fn run() -> Result<(), market_digest::DigestError> {
//! let client = DigestClientBuilder::from_env().build()?;
//! let watchlist = Watchlist::from_assets([
//!     AssetSpec::new("AAPL", "Apple Inc.", AssetClass::Equity),
//!     AssetSpec::new("BTC-USD", "Bitcoin", AssetClass::Crypto),
//! ]);
//! let digest = build_digest(Arc::new(client), &watchlist, &DigestConfig::default()).await?;
//! digest.write_snapshot("out/digest.json")?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod core;
pub mod digest;
pub mod heroes;
pub mod movers;
pub mod news;
pub mod quote;
pub mod recency;

pub use aggregate::{aggregate, aggregate_at};
pub use config::DigestConfig;
pub use crate::core::{
    AssetClass, AssetSpec, Backoff, DigestClient, DigestClientBuilder, DigestError,
    MarketDataService, RetryConfig, ServiceFuture, Watchlist, WatchlistEntry,
};
pub use digest::{
    Digest, DigestRenderer, MarketBreadth, build_digest, build_digest_at, read_snapshot,
    render_digest,
};
pub use heroes::{
    Category, CategorizedHeroes, CategoryRules, CategoryTerms, HeroConfig, categorize,
    select_hero_pool, select_heroes,
};
pub use movers::{MoverEntry, rank_movers};
pub use news::{Article, Sentiment, SentimentLabel, best_headline, fetch_news};
pub use quote::{Quote, QuoteExtension, QuoteSource, fetch_quote};
pub use recency::{filter_recent, filter_recent_at, parse_timestamp};
