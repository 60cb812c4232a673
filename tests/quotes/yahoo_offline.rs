use std::time::Duration;

use chrono::{TimeZone, Utc};

use httpmock::Method::GET;
use market_digest::quote::fetch_traditional_quote;
use market_digest::{AssetClass, AssetSpec, QuoteExtension, QuoteSource, fetch_quote};

use crate::common::{builder_for, equity, setup_server};

const CHART_AAPL: &str = r#"{
  "chart": {
    "result": [{
      "meta": {
        "symbol": "AAPL",
        "regularMarketPrice": 110.0,
        "regularMarketDayHigh": 111.0,
        "regularMarketDayLow": 97.0,
        "fiftyTwoWeekHigh": 120.0,
        "fiftyTwoWeekLow": 80.0
      },
      "timestamp": [1700000000, 1700086400, 1700172800],
      "indicators": {
        "quote": [{
          "open":   [98.0, 99.0, 100.0],
          "high":   [99.5, 101.0, 112.0],
          "low":    [97.5, 98.0, 99.0],
          "close":  [99.0, 100.0, 110.0],
          "volume": [1000, 2000, 3000]
        }]
      }
    }],
    "error": null
  }
}"#;

#[tokio::test]
async fn yahoo_chart_is_normalized_into_quote() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AAPL")
            .query_param("range", "1y")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(CHART_AAPL);
    });

    let client = builder_for(&server).build().unwrap();
    let spec = equity("AAPL", "Apple Inc.").with_industry("Consumer Technology");
    let q = fetch_quote(&client, &spec).await;
    mock.assert();

    assert_eq!(q.source, QuoteSource::Yahoo);
    assert_eq!(q.symbol, "AAPL");
    assert_eq!(q.name, "Apple Inc.");
    assert_eq!(q.industry.as_deref(), Some("Consumer Technology"));
    assert_eq!(q.asset_class, AssetClass::Equity);
    assert_eq!(q.price, 110.0);
    assert_eq!(q.open, 100.0);
    assert_eq!(q.high, 112.0);
    assert_eq!(q.low, 99.0);
    assert_eq!(q.volume, 3000.0);
    assert_eq!(q.change, 10.0);
    assert_eq!(q.change_percent, 10.0);

    match q.extension {
        QuoteExtension::Traditional(m) => {
            assert_eq!(m.week52_high, Some(120.0));
            assert_eq!(m.week52_low, Some(80.0));
            assert_eq!(m.range_position, Some(75.0));
            // three bars are not enough for a one-week lookback
            assert_eq!(m.change_1w_percent, None);
            assert_eq!(m.change_1m_percent, None);
            // every bar falls in the same calendar year
            assert_eq!(m.change_ytd_percent, None);
        }
        other => panic!("expected traditional metrics, got {other:?}"),
    }
}

#[tokio::test]
async fn yahoo_price_falls_back_to_last_close_and_skips_null_bars() {
    let server = setup_server();
    let body = r#"{
      "chart": {
        "result": [{
          "meta": {},
          "indicators": { "quote": [{
            "open":  [50.0, null],
            "close": [48.0, 55.0, null]
          }]}
        }],
        "error": null
      }
    }"#;
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/SPY");
        then.status(200).body(body);
    });

    let client = builder_for(&server).build().unwrap();
    let spec = AssetSpec::new("SPY", "SPDR S&P 500", AssetClass::Etf);
    let q = fetch_traditional_quote(&client, &spec).await;

    assert_eq!(q.source, QuoteSource::Yahoo);
    assert_eq!(q.asset_class, AssetClass::Etf);
    assert_eq!(q.price, 55.0);
    assert_eq!(q.open, 50.0);
    assert_eq!(q.change_percent, 10.0);
}

#[tokio::test]
async fn yahoo_chart_error_node_falls_back_to_synthetic_without_key() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/NOPE");
        then.status(200).body(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found"}}}"#,
        );
    });
    let av = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body("{}");
    });

    let client = builder_for(&server).build().unwrap();
    let q = fetch_quote(&client, &equity("NOPE", "Nope Corp")).await;

    mock.assert();
    av.assert_hits(0);
    assert_eq!(q.source, QuoteSource::Synthetic);
    assert!(q.price > 0.0);
}

#[tokio::test]
async fn yahoo_timeout_is_treated_as_failure() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/SLOW");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(CHART_AAPL);
    });

    let client = builder_for(&server)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let started = std::time::Instant::now();
    let q = fetch_quote(&client, &equity("SLOW", "Slow Corp")).await;

    assert_eq!(q.source, QuoteSource::Synthetic);
    assert!(started.elapsed() < Duration::from_secs(3));
}

/// 25 daily bars from 2025-12-20 to 2026-01-13, closing at 100, 101, ..., 124.
fn year_boundary_chart() -> String {
    let start = Utc.with_ymd_and_hms(2025, 12, 20, 21, 0, 0).unwrap().timestamp();
    let timestamps: Vec<i64> = (0..25).map(|i| start + i * 86_400).collect();
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    serde_json::json!({
        "chart": {
            "result": [{
                "meta": {},
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
    .to_string()
}

#[tokio::test]
async fn yahoo_momentum_and_ytd_from_daily_closes() {
    let server = setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/QQQ");
        then.status(200).body(year_boundary_chart());
    });

    let client = builder_for(&server).build().unwrap();
    let spec = AssetSpec::new("QQQ", "Invesco QQQ Trust", AssetClass::Etf);
    let q = fetch_quote(&client, &spec).await;

    assert_eq!(q.source, QuoteSource::Yahoo);
    assert_eq!(q.price, 124.0);

    let QuoteExtension::Traditional(m) = q.extension else {
        panic!("expected traditional metrics");
    };
    // six bars back is 118, twenty-two bars back is 102
    let week = m.change_1w_percent.unwrap();
    let month = m.change_1m_percent.unwrap();
    assert!((week - (124.0 / 118.0 - 1.0) * 100.0).abs() < 1e-9);
    assert!((month - (124.0 / 102.0 - 1.0) * 100.0).abs() < 1e-9);

    // 2025-12-31 is bar 11, closing at 111
    let ytd = m.change_ytd_percent.unwrap();
    assert!((ytd - (124.0 / 111.0 - 1.0) * 100.0).abs() < 1e-9);

    // no meta bounds: the 52-week range comes from the closes
    assert_eq!(m.week52_high, Some(124.0));
    assert_eq!(m.week52_low, Some(100.0));
    assert_eq!(m.range_position, Some(100.0));
}
