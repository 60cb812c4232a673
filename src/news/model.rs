use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout every article is normalized to; sorts lexicographically.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A normalized news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The headline. Articles with an empty title are never ranked.
    pub title: String,
    pub description: String,
    pub url: String,
    /// Publisher display name (e.g., "Reuters").
    pub source: String,
    /// ISO-8601 publish time, normalized to [`TIMESTAMP_FORMAT`] when parseable.
    pub published_at: String,
    /// Watchlist symbol this article was fetched for; `None` for cross-cutting items.
    #[serde(default)]
    pub symbol: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, published_at: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            url: String::new(),
            source: String::new(),
            published_at: published_at.into(),
            symbol: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Uppercased `title + " " + description`, the text the classifier scans.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_uppercase()
    }
}

/// Render `ts` in the normalized article layout.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Normalize a provider timestamp; unparseable input is kept verbatim (trimmed).
pub fn normalize_timestamp(raw: &str) -> String {
    crate::recency::parse_timestamp(raw).map_or_else(|| raw.trim().to_string(), format_timestamp)
}
