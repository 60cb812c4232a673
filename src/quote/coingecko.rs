use crate::{
    core::{AssetSpec, DigestClient, DigestError, net},
    quote::{
        model::{CryptoMetrics, Quote, QuoteExtension, QuoteSource, RawPrices},
        wire::CoinMarket,
    },
};

/// Well-known tickers whose CoinGecko id differs from the lowercased symbol.
const KNOWN_IDS: &[(&str, &str)] = &[
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("DOGE", "dogecoin"),
    ("XRP", "ripple"),
    ("SOL", "solana"),
    ("ADA", "cardano"),
];

/// CoinGecko id for an asset: explicit provider id, then the known map, then the base symbol.
pub fn coin_id(spec: &AssetSpec) -> String {
    if let Some(id) = spec.provider_id.as_deref().filter(|s| !s.trim().is_empty()) {
        return id.trim().to_string();
    }
    let upper = spec.symbol.to_ascii_uppercase();
    let base = upper.strip_suffix("-USD").unwrap_or(&upper);
    KNOWN_IDS
        .iter()
        .find(|(sym, _)| *sym == base)
        .map_or_else(|| base.to_ascii_lowercase(), |(_, id)| (*id).to_string())
}

pub(super) async fn fetch(client: &DigestClient, spec: &AssetSpec) -> Result<Quote, DigestError> {
    let id = coin_id(spec);
    let mut url = client.base_coingecko().join("coins/markets")?;
    url.query_pairs_mut()
        .append_pair("vs_currency", "usd")
        .append_pair("ids", &id)
        .append_pair("price_change_percentage", "24h");

    let markets: Vec<CoinMarket> = net::get_json(client, url).await?;
    parse_markets(spec, &id, markets)
}

pub(super) fn parse_markets(
    spec: &AssetSpec,
    id: &str,
    markets: Vec<CoinMarket>,
) -> Result<Quote, DigestError> {
    let market = markets
        .into_iter()
        .find(|m| m.id.as_deref().is_none_or(|mid| mid == id))
        .ok_or_else(|| DigestError::Data(format!("coingecko: no market for id `{id}`")))?;

    let price = market
        .current_price
        .filter(|p| *p > 0.0)
        .ok_or_else(|| DigestError::Data(format!("coingecko: no price for `{id}`")))?;

    let raw = RawPrices {
        price,
        open: market.price_change_24h.map(|d| price - d).filter(|o| *o > 0.0),
        high: market.high_24h,
        low: market.low_24h,
        volume: market.total_volume,
        change: market.price_change_24h,
        // Read directly from the provider; never derived for crypto.
        change_percent: Some(market.price_change_percentage_24h.unwrap_or(0.0)),
    };

    let extension = QuoteExtension::Crypto(CryptoMetrics {
        market_cap: market.market_cap,
        high_24h: market.high_24h,
        low_24h: market.low_24h,
        ath: market.ath,
        ath_change_percent: market.ath_change_percentage,
    });

    Ok(Quote::from_raw(spec, raw, QuoteSource::CoinGecko, extension))
}
