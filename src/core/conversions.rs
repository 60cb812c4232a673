//! Lenient numeric helpers for provider payloads that ship numbers as strings.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Parse `"1,234.50"`, `" 2.31% "` or `"-0.5"` into an `f64`.
///
/// Returns `None` for empty, non-numeric or non-finite input.
pub(crate) fn parse_lenient_f64(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Serde adapter: accept a JSON number, a numeric string, or null.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<NumOrStr>::deserialize(deserializer)? {
        Some(NumOrStr::Num(n)) => Some(n).filter(|v| v.is_finite()),
        Some(NumOrStr::Str(s)) => parse_lenient_f64(&s),
        Some(NumOrStr::Other(IgnoredAny)) | None => None,
    })
}

/// Percentage position of `price` within `[low, high]`, clamped to 0..=100.
/// A degenerate range yields the midpoint.
pub(crate) fn position_in_range(price: f64, low: f64, high: f64) -> f64 {
    if !price.is_finite() || !low.is_finite() || !high.is_finite() || high <= low {
        return 50.0;
    }
    ((price - low) / (high - low) * 100.0).clamp(0.0, 100.0)
}

/// Percent change from `prev` to `curr`, or `None` when `prev` is missing or zero.
pub(crate) fn pct_change(curr: f64, prev: Option<f64>) -> Option<f64> {
    let prev = prev?;
    if prev == 0.0 || !prev.is_finite() || !curr.is_finite() {
        return None;
    }
    Some((curr / prev - 1.0) * 100.0)
}
