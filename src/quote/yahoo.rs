use chrono::{DateTime, Datelike, Utc};

use crate::{
    core::{
        AssetSpec, DigestClient, DigestError,
        conversions::{pct_change, position_in_range},
        net,
    },
    quote::{
        model::{Quote, QuoteExtension, QuoteSource, RawPrices, TraditionalMetrics},
        wire::{ChartEnvelope, ChartMeta, QuoteBlock},
    },
};

/// Bars looked back from the latest close for the one-week and one-month momentum fields.
const WEEK_BARS: usize = 6;
const MONTH_BARS: usize = 22;

/// A year of daily bars always reaches back to the previous year's last session.
const CHART_RANGE: &str = "1y";

pub(super) async fn fetch(client: &DigestClient, spec: &AssetSpec) -> Result<Quote, DigestError> {
    let mut url = client.base_chart().join(&spec.symbol)?;
    url.query_pairs_mut()
        .append_pair("range", CHART_RANGE)
        .append_pair("interval", "1d");

    let envelope: ChartEnvelope = net::get_json(client, url).await?;
    parse_chart(spec, envelope)
}

fn last_some(values: &[Option<f64>]) -> Option<f64> {
    values.iter().rev().find_map(|v| v.filter(|x| x.is_finite()))
}

fn nth_back(closes: &[f64], k: usize) -> Option<f64> {
    closes.len().checked_sub(k + 1).map(|i| closes[i])
}

/// Last close of the calendar year before the latest bar (UTC).
fn year_end_close(dated: &[(DateTime<Utc>, f64)]) -> Option<f64> {
    let prior_year = dated.last()?.0.year() - 1;
    dated
        .iter()
        .rev()
        .find(|(ts, _)| ts.year() == prior_year)
        .map(|(_, close)| *close)
}

pub(super) fn parse_chart(spec: &AssetSpec, envelope: ChartEnvelope) -> Result<Quote, DigestError> {
    let node = envelope
        .chart
        .ok_or_else(|| DigestError::Data("chart: missing `chart` node".into()))?;

    if let Some(err) = node.error {
        return Err(DigestError::Data(format!(
            "chart error {}: {}",
            err.code, err.description
        )));
    }

    let result = node
        .result
        .and_then(|mut v| if v.is_empty() { None } else { Some(v.swap_remove(0)) })
        .ok_or_else(|| DigestError::Data("chart: empty result".into()))?;

    let meta = result.meta.unwrap_or_default();
    let block: QuoteBlock = result
        .indicators
        .and_then(|mut ind| {
            if ind.quote.is_empty() {
                None
            } else {
                Some(ind.quote.swap_remove(0))
            }
        })
        .unwrap_or_default();

    let closes: Vec<f64> = block
        .close
        .iter()
        .filter_map(|c| c.filter(|x| x.is_finite()))
        .collect();
    let dated: Vec<(DateTime<Utc>, f64)> = result
        .timestamp
        .iter()
        .zip(&block.close)
        .filter_map(|(ts, c)| {
            let close = c.filter(|x| x.is_finite())?;
            Some((DateTime::from_timestamp(*ts, 0)?, close))
        })
        .collect();

    let price = meta
        .regular_market_price
        .or_else(|| closes.last().copied())
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or_else(|| DigestError::Data(format!("chart: no usable price for {}", spec.symbol)))?;

    let raw = RawPrices {
        price,
        open: last_some(&block.open).filter(|o| *o > 0.0),
        high: last_some(&block.high).or(meta.regular_market_day_high),
        low: last_some(&block.low).or(meta.regular_market_day_low),
        volume: last_some(&block.volume).or(meta.regular_market_volume),
        change: None,
        change_percent: None,
    };

    let extension = QuoteExtension::Traditional(traditional_metrics(price, &meta, &closes, &dated));
    Ok(Quote::from_raw(spec, raw, QuoteSource::Yahoo, extension))
}

fn traditional_metrics(
    price: f64,
    meta: &ChartMeta,
    closes: &[f64],
    dated: &[(DateTime<Utc>, f64)],
) -> TraditionalMetrics {
    let window_high = closes.iter().copied().reduce(f64::max);
    let window_low = closes.iter().copied().reduce(f64::min);
    let week52_high = meta.fifty_two_week_high.or(window_high);
    let week52_low = meta.fifty_two_week_low.or(window_low);

    TraditionalMetrics {
        week52_high,
        week52_low,
        range_position: match (week52_low, week52_high) {
            (Some(lo), Some(hi)) => Some(position_in_range(price, lo, hi)),
            _ => None,
        },
        change_1w_percent: pct_change(price, nth_back(closes, WEEK_BARS)),
        change_1m_percent: pct_change(price, nth_back(closes, MONTH_BARS)),
        change_ytd_percent: pct_change(price, year_end_close(dated)),
    }
}
