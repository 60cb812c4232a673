use serde::{Deserialize, Serialize};

use crate::core::{AssetClass, AssetSpec};
use crate::news::{Article, Sentiment, best_headline};

/// Which step of a fetch chain produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSource {
    Yahoo,
    AlphaVantage,
    CoinGecko,
    /// Fabricated because every real provider failed.
    Synthetic,
}

/// Extra fields for equities, ETFs and commodities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TraditionalMetrics {
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    /// Position of the price inside the 52-week range, 0..=100.
    pub range_position: Option<f64>,
    pub change_1w_percent: Option<f64>,
    pub change_1m_percent: Option<f64>,
    /// Change since the previous calendar year's last close.
    #[serde(default)]
    pub change_ytd_percent: Option<f64>,
}

/// Extra fields for cryptocurrencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CryptoMetrics {
    pub market_cap: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub ath: Option<f64>,
    /// Percent distance from the all-time high (negative below it).
    pub ath_change_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteExtension {
    Traditional(TraditionalMetrics),
    Crypto(CryptoMetrics),
}

/// A normalized snapshot of one asset, with its filtered news once attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub industry: Option<String>,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub change: f64,
    pub change_percent: f64,
    pub source: QuoteSource,
    pub extension: QuoteExtension,
    #[serde(default)]
    pub news: Vec<Article>,
    #[serde(default)]
    pub sentiment: Sentiment,
    /// The attached article most relevant to this symbol, for the asset card.
    #[serde(default)]
    pub headline: Option<Article>,
}

/// `(price - open) / open * 100`, or `0.0` when `open` is not positive.
pub fn change_percent(price: f64, open: f64) -> f64 {
    if open > 0.0 && price.is_finite() {
        (price - open) * 100.0 / open
    } else {
        0.0
    }
}

/// Price fields a provider managed to read, before normalization.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawPrices {
    pub(crate) price: f64,
    pub(crate) open: Option<f64>,
    pub(crate) high: Option<f64>,
    pub(crate) low: Option<f64>,
    pub(crate) volume: Option<f64>,
    pub(crate) change: Option<f64>,
    pub(crate) change_percent: Option<f64>,
}

impl Quote {
    /// Normalize provider prices into a quote for `spec`.
    ///
    /// Missing open/high/low collapse onto the price. A missing `change_percent`
    /// is derived from open; a missing absolute change is derived from both.
    pub(crate) fn from_raw(
        spec: &AssetSpec,
        raw: RawPrices,
        source: QuoteSource,
        extension: QuoteExtension,
    ) -> Self {
        let price = raw.price;
        let open = raw.open.filter(|v| v.is_finite()).unwrap_or(price);
        let change_percent = raw
            .change_percent
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| change_percent(price, open));
        let change = raw
            .change
            .filter(|v| v.is_finite())
            .unwrap_or(price - open);

        Self {
            symbol: spec.symbol.clone(),
            name: spec.name.clone(),
            asset_class: spec.asset_class,
            industry: spec.industry.clone(),
            price,
            open,
            high: raw.high.filter(|v| v.is_finite()).unwrap_or(price.max(open)),
            low: raw.low.filter(|v| v.is_finite()).unwrap_or(price.min(open)),
            volume: raw.volume.filter(|v| v.is_finite()).unwrap_or(0.0),
            change,
            change_percent,
            source,
            extension,
            news: Vec::new(),
            sentiment: Sentiment::default(),
            headline: None,
        }
    }

    /// Attach filtered news, its sentiment and the best-matching headline, consuming the quote.
    #[must_use]
    pub fn with_news(mut self, news: Vec<Article>) -> Self {
        self.sentiment = Sentiment::analyze(&news);
        self.headline = best_headline(&self.symbol, &news).cloned();
        self.news = news;
        self
    }
}
