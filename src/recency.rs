//! Time-window filtering of articles.
//!
//! The filter is fail-open: an article whose timestamp cannot be resolved is
//! kept rather than silently dropped.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::news::Article;

/// Default look-back window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Resolve an ISO-8601 timestamp to UTC.
///
/// Accepts RFC 3339 with an offset (a trailing `Z` is read as `+00:00`),
/// naive `YYYY-MM-DDTHH:MM:SS[.f]` as UTC, and bare `YYYY-MM-DD` as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let with_offset = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&with_offset) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Start of the window, or `None` when `window_days` reaches past the representable range.
fn window_start(window_days: i64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    TimeDelta::try_days(window_days).and_then(|d| now.checked_sub_signed(d))
}

/// Keep articles published strictly after `now - window_days`, plus undateable ones.
///
/// A window too large to subtract from `now` is unbounded and keeps everything.
pub fn filter_recent_at(articles: &[Article], window_days: i64, now: DateTime<Utc>) -> Vec<Article> {
    let Some(cutoff) = window_start(window_days, now) else {
        tracing::debug!(window_days, "recency window exceeds the calendar, keeping all articles");
        return articles.to_vec();
    };
    articles
        .iter()
        .filter(|a| parse_timestamp(&a.published_at).is_none_or(|ts| ts > cutoff))
        .cloned()
        .collect()
}

/// [`filter_recent_at`] against the current time.
pub fn filter_recent(articles: &[Article], window_days: i64) -> Vec<Article> {
    filter_recent_at(articles, window_days, Utc::now())
}
