//! Cross-asset hero news: pool selection and keyword categorization.

mod keywords;

pub use keywords::{Category, CategoryRules, CategoryTerms};

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::news::Article;
use crate::quote::Quote;
use crate::recency::{DEFAULT_WINDOW_DAYS, filter_recent_at, parse_timestamp};

/// Knobs for hero selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Most recent articles kept in the pool before categorization.
    pub pool_size: usize,
    pub breaking_cap: usize,
    /// Cap for every bucket other than `breaking`.
    pub bucket_cap: usize,
    pub terms: CategoryTerms,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            pool_size: 10,
            breaking_cap: 2,
            bucket_cap: 3,
            terms: CategoryTerms::default(),
        }
    }
}

impl HeroConfig {
    pub fn cap_for(&self, category: Category) -> usize {
        match category {
            Category::Breaking => self.breaking_cap,
            _ => self.bucket_cap,
        }
    }
}

/// Category → articles, most recent first. Every category key is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedHeroes {
    buckets: BTreeMap<Category, Vec<Article>>,
}

impl Default for CategorizedHeroes {
    fn default() -> Self {
        Self {
            buckets: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }
}

impl CategorizedHeroes {
    pub fn get(&self, category: Category) -> &[Article] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Article])> {
        self.buckets.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Newest-first pool of titled articles from every quote's attached news.
///
/// The pool is recency-filtered, sorted newest first by parsed publish time
/// (stable, undateable articles last) and truncated to `pool_size`.
pub fn select_hero_pool(
    quotes: &[Quote],
    pool_size: usize,
    window_days: i64,
    now: DateTime<Utc>,
) -> Vec<Article> {
    let pool: Vec<Article> = quotes
        .iter()
        .flat_map(|q| q.news.iter())
        .filter(|a| a.has_title())
        .cloned()
        .collect();

    let mut pool = filter_recent_at(&pool, window_days, now);
    // undateable articles (kept by the fail-open filter) sort after every dated one
    pool.sort_by_cached_key(|a| Reverse(parse_timestamp(&a.published_at)));
    pool.truncate(pool_size);
    pool
}

/// Bucket `articles` (already in recency order) and apply the per-bucket caps.
pub fn categorize(
    articles: &[Article],
    rules: &CategoryRules,
    config: &HeroConfig,
) -> CategorizedHeroes {
    let mut heroes = CategorizedHeroes::default();
    for article in articles.iter().filter(|a| a.has_title()) {
        let category = rules.classify(article);
        heroes
            .buckets
            .entry(category)
            .or_default()
            .push(article.clone());
    }
    for (category, bucket) in &mut heroes.buckets {
        bucket.truncate(config.cap_for(*category));
    }
    heroes
}

/// Pool selection followed by categorization with default windowing.
pub fn select_heroes(
    quotes: &[Quote],
    rules: &CategoryRules,
    config: &HeroConfig,
    now: DateTime<Utc>,
) -> CategorizedHeroes {
    select_heroes_within(quotes, rules, config, DEFAULT_WINDOW_DAYS, now)
}

/// [`select_heroes`] with an explicit recency window.
pub fn select_heroes_within(
    quotes: &[Quote],
    rules: &CategoryRules,
    config: &HeroConfig,
    window_days: i64,
    now: DateTime<Utc>,
) -> CategorizedHeroes {
    let pool = select_hero_pool(quotes, config.pool_size, window_days, now);
    tracing::debug!(pool = pool.len(), "hero pool selected");
    categorize(&pool, rules, config)
}
