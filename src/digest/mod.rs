//! The assembled digest and the end-to-end pipeline that produces it.

mod render;
mod snapshot;

pub use render::{DigestRenderer, render_digest};
pub use snapshot::read_snapshot;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_at;
use crate::config::DigestConfig;
use crate::core::{DigestError, MarketDataService, Watchlist};
use crate::heroes::{CategorizedHeroes, CategoryRules, select_heroes_within};
use crate::movers::{MoverEntry, rank_movers};
use crate::quote::Quote;
use crate::recency::parse_timestamp;

/// Count of quotes by direction of change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketBreadth {
    pub up: usize,
    pub down: usize,
    pub unchanged: usize,
}

impl MarketBreadth {
    pub fn from_quotes(quotes: &[Quote]) -> Self {
        quotes.iter().fold(Self::default(), |mut acc, q| {
            if q.change_percent > 0.0 {
                acc.up += 1;
            } else if q.change_percent < 0.0 {
                acc.down += 1;
            } else {
                acc.unchanged += 1;
            }
            acc
        })
    }
}

/// Final artifact handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Digest {
    pub generated_at: DateTime<Utc>,
    pub quotes: Vec<Quote>,
    pub heroes: CategorizedHeroes,
    pub movers: Vec<MoverEntry>,
    pub breadth: MarketBreadth,
    pub watchlist: Watchlist,
}

impl Digest {
    /// Combine pre-computed parts. Pure: no I/O, no randomness.
    pub fn assemble(
        generated_at: DateTime<Utc>,
        quotes: Vec<Quote>,
        heroes: CategorizedHeroes,
        movers: Vec<MoverEntry>,
        watchlist: Watchlist,
    ) -> Self {
        let breadth = MarketBreadth::from_quotes(&quotes);
        Self {
            generated_at,
            quotes,
            heroes,
            movers,
            breadth,
            watchlist,
        }
    }

    /// Most recent article across all hero buckets, used for the email subject line.
    pub fn lead_headline(&self) -> Option<&crate::news::Article> {
        self.heroes
            .iter()
            .flat_map(|(_, articles)| articles.iter())
            .max_by_key(|a| parse_timestamp(&a.published_at))
    }
}

/// Run the whole pipeline at `now`: aggregate, pick heroes, rank movers, assemble.
///
/// # Errors
///
/// Returns [`DigestError::EmptyWatchlist`] when the watchlist has no assets.
/// Provider failures never surface here.
pub async fn build_digest_at<S>(
    service: Arc<S>,
    watchlist: &Watchlist,
    config: &DigestConfig,
    now: DateTime<Utc>,
) -> Result<Digest, DigestError>
where
    S: MarketDataService + 'static,
{
    if watchlist.asset_count() == 0 {
        tracing::error!("no assets in watchlist, aborting run");
        return Err(DigestError::EmptyWatchlist);
    }

    tracing::info!(assets = watchlist.asset_count(), "collecting market data");
    let quotes = aggregate_at(service, watchlist, config, now).await;

    let rules = CategoryRules::from_watchlist(watchlist, &config.hero.terms);
    let heroes = select_heroes_within(&quotes, &rules, &config.hero, config.recency_days, now);
    let movers = rank_movers(&quotes, config.mover_count);

    tracing::info!(
        quotes = quotes.len(),
        heroes = heroes.total(),
        movers = movers.len(),
        "digest assembled"
    );
    Ok(Digest::assemble(now, quotes, heroes, movers, watchlist.clone()))
}

/// [`build_digest_at`] stamped with the current time.
///
/// # Errors
///
/// See [`build_digest_at`].
pub async fn build_digest<S>(
    service: Arc<S>,
    watchlist: &Watchlist,
    config: &DigestConfig,
) -> Result<Digest, DigestError>
where
    S: MarketDataService + 'static,
{
    build_digest_at(service, watchlist, config, Utc::now()).await
}
