//! Per-asset-class quote fetch chains.
//!
//! - Equities, ETFs and commodities: Yahoo chart → Alpha Vantage (keyed) → synthetic.
//! - Crypto: CoinGecko → synthetic.
//!
//! Every provider returns `Result`; the chain logs failures and falls through,
//! so [`fetch_quote`] itself is infallible.

mod alphavantage;
mod coingecko;
mod model;
mod synthetic;
mod wire;
mod yahoo;

pub use coingecko::coin_id;
pub use model::{
    CryptoMetrics, Quote, QuoteExtension, QuoteSource, TraditionalMetrics, change_percent,
};
pub use synthetic::synthetic_quote;

use crate::core::{AssetClass, AssetSpec, DigestClient, DigestError};

fn log_fallback(spec: &AssetSpec, provider: &'static str, err: &DigestError) {
    tracing::warn!(symbol = %spec.symbol, provider, error = %err, "quote provider failed, falling back");
}

/// Fetch a quote for `spec` using the chain for its asset class.
///
/// Never fails: when every real provider is unavailable the synthetic
/// generator supplies a structurally valid quote.
pub async fn fetch_quote(client: &DigestClient, spec: &AssetSpec) -> Quote {
    match spec.asset_class {
        AssetClass::Crypto => fetch_crypto_quote(client, spec).await,
        AssetClass::Equity | AssetClass::Etf | AssetClass::Commodity => {
            fetch_traditional_quote(client, spec).await
        }
    }
}

/// Yahoo → Alpha Vantage (only with a key) → synthetic.
pub async fn fetch_traditional_quote(client: &DigestClient, spec: &AssetSpec) -> Quote {
    tracing::debug!(symbol = %spec.symbol, provider = "yahoo", "fetching quote");
    match yahoo::fetch(client, spec).await {
        Ok(q) => return q,
        Err(e) => log_fallback(spec, "yahoo", &e),
    }

    if client.has_alpha_vantage() {
        tracing::debug!(symbol = %spec.symbol, provider = "alphavantage", "fetching quote");
        match alphavantage::fetch(client, spec).await {
            Ok(q) => return q,
            Err(e) => log_fallback(spec, "alphavantage", &e),
        }
    }

    tracing::warn!(symbol = %spec.symbol, "all quote providers failed, using synthetic data");
    synthetic_quote(spec)
}

/// CoinGecko → synthetic.
pub async fn fetch_crypto_quote(client: &DigestClient, spec: &AssetSpec) -> Quote {
    tracing::debug!(symbol = %spec.symbol, provider = "coingecko", "fetching quote");
    match coingecko::fetch(client, spec).await {
        Ok(q) => return q,
        Err(e) => log_fallback(spec, "coingecko", &e),
    }

    tracing::warn!(symbol = %spec.symbol, "crypto provider failed, using synthetic data");
    synthetic_quote(spec)
}
