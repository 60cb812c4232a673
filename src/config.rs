use serde::{Deserialize, Serialize};

use crate::heroes::HeroConfig;
use crate::movers::DEFAULT_MOVER_COUNT;
use crate::recency::DEFAULT_WINDOW_DAYS;

/// Articles kept per symbol from a real news provider.
pub const DEFAULT_NEWS_PER_SYMBOL: usize = 3;

/// Pipeline settings. Every field has a default, so a partial JSON document
/// (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Look-back window for per-asset news and the hero pool.
    pub recency_days: i64,
    pub news_per_symbol: usize,
    pub mover_count: usize,
    pub hero: HeroConfig,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            recency_days: DEFAULT_WINDOW_DAYS,
            news_per_symbol: DEFAULT_NEWS_PER_SYMBOL,
            mover_count: DEFAULT_MOVER_COUNT,
            hero: HeroConfig::default(),
        }
    }
}

impl DigestConfig {
    #[must_use]
    pub fn recency_days(mut self, days: i64) -> Self {
        self.recency_days = days;
        self
    }

    #[must_use]
    pub fn news_per_symbol(mut self, n: usize) -> Self {
        self.news_per_symbol = n;
        self
    }

    #[must_use]
    pub fn mover_count(mut self, n: usize) -> Self {
        self.mover_count = n;
        self
    }

    #[must_use]
    pub fn hero(mut self, hero: HeroConfig) -> Self {
        self.hero = hero;
        self
    }
}
