use serde::Deserialize;

use crate::core::conversions::de_lenient_f64;

/* ---------------- Yahoo chart v8 ---------------- */

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<ChartMeta>,
    /// Bar open times, epoch seconds; aligned with the indicator arrays.
    #[serde(default)]
    pub(crate) timestamp: Vec<i64>,
    #[serde(default)]
    pub(crate) indicators: Option<Indicators>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartMeta {
    #[serde(default)]
    pub(crate) regular_market_price: Option<f64>,
    #[serde(default)]
    pub(crate) regular_market_day_high: Option<f64>,
    #[serde(default)]
    pub(crate) regular_market_day_low: Option<f64>,
    #[serde(default)]
    pub(crate) regular_market_volume: Option<f64>,
    #[serde(default)]
    pub(crate) fifty_two_week_high: Option<f64>,
    #[serde(default)]
    pub(crate) fifty_two_week_low: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize, Default)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) volume: Vec<Option<f64>>,
}

/* ---------------- Alpha Vantage GLOBAL_QUOTE ---------------- */

#[derive(Deserialize)]
pub(crate) struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote", default)]
    pub(crate) global_quote: Option<GlobalQuote>,
    /// Rate-limit notice on the free tier.
    #[serde(rename = "Note", default)]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information", default)]
    pub(crate) information: Option<String>,
    #[serde(rename = "Error Message", default)]
    pub(crate) error_message: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct GlobalQuote {
    #[serde(rename = "02. open", default, deserialize_with = "de_lenient_f64")]
    pub(crate) open: Option<f64>,
    #[serde(rename = "03. high", default, deserialize_with = "de_lenient_f64")]
    pub(crate) high: Option<f64>,
    #[serde(rename = "04. low", default, deserialize_with = "de_lenient_f64")]
    pub(crate) low: Option<f64>,
    #[serde(rename = "05. price", default, deserialize_with = "de_lenient_f64")]
    pub(crate) price: Option<f64>,
    #[serde(rename = "06. volume", default, deserialize_with = "de_lenient_f64")]
    pub(crate) volume: Option<f64>,
    #[serde(rename = "09. change", default, deserialize_with = "de_lenient_f64")]
    pub(crate) change: Option<f64>,
    #[serde(
        rename = "10. change percent",
        default,
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) change_percent: Option<f64>,
}

/* ---------------- CoinGecko coins/markets ---------------- */

#[derive(Deserialize)]
pub(crate) struct CoinMarket {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) current_price: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) market_cap: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) total_volume: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) high_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) low_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) price_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) price_change_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) ath: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) ath_change_percentage: Option<f64>,
}
