//! Last link of every quote chain: structurally valid placeholder values.

use rand::Rng;

use crate::core::{AssetClass, AssetSpec};
use crate::quote::model::{
    CryptoMetrics, Quote, QuoteExtension, QuoteSource, RawPrices, TraditionalMetrics,
};

/// Fabricate a quote for `spec` with bounded random prices.
///
/// Always returns `price > 0` and the input asset class; `change_percent` is
/// consistent with the fabricated open.
pub fn synthetic_quote(spec: &AssetSpec) -> Quote {
    let mut rng = rand::thread_rng();

    let (price, max_move) = match spec.asset_class {
        AssetClass::Crypto => (rng.gen_range(0.05..60_000.0), 8.0),
        _ => (rng.gen_range(5.0..500.0), 5.0),
    };
    let pct: f64 = rng.gen_range(-max_move..max_move);
    let open = price / (1.0 + pct / 100.0);
    let high = price.max(open) * rng.gen_range(1.0..1.02);
    let low = price.min(open) * rng.gen_range(0.98..1.0);
    let volume = rng.gen_range(100_000.0..50_000_000.0_f64).round();

    let raw = RawPrices {
        price,
        open: Some(open),
        high: Some(high),
        low: Some(low),
        volume: Some(volume),
        change: None,
        change_percent: None,
    };

    let extension = match spec.asset_class {
        AssetClass::Crypto => {
            let ath = price * rng.gen_range(1.0..3.0);
            QuoteExtension::Crypto(CryptoMetrics {
                market_cap: Some(price * rng.gen_range(1.0e6..1.0e9)),
                high_24h: Some(high),
                low_24h: Some(low),
                ath: Some(ath),
                ath_change_percent: Some((price - ath) * 100.0 / ath),
            })
        }
        _ => {
            let week52_high = high * rng.gen_range(1.0..1.4);
            let week52_low = low * rng.gen_range(0.6..1.0);
            QuoteExtension::Traditional(TraditionalMetrics {
                week52_high: Some(week52_high),
                week52_low: Some(week52_low),
                range_position: Some(crate::core::conversions::position_in_range(
                    price,
                    week52_low,
                    week52_high,
                )),
                change_1w_percent: Some(rng.gen_range(-10.0..10.0)),
                change_1m_percent: Some(rng.gen_range(-20.0..20.0)),
                change_ytd_percent: Some(rng.gen_range(-30.0..30.0)),
            })
        }
    };

    Quote::from_raw(spec, raw, QuoteSource::Synthetic, extension)
}
