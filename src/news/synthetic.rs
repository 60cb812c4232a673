use chrono::{DateTime, Duration, Utc};

use crate::core::{AssetClass, AssetSpec};
use crate::news::model::{Article, format_timestamp};

/// Two template articles for `spec`, stamped 5 minutes and 4 hours before `now`.
pub fn synthetic_news(spec: &AssetSpec, now: DateTime<Utc>) -> Vec<Article> {
    let topic = match spec.asset_class {
        AssetClass::Crypto => "crypto markets",
        AssetClass::Etf => "fund flows",
        AssetClass::Commodity => "commodity markets",
        AssetClass::Equity => "the stock market",
    };
    let quote_url = format!("https://finance.yahoo.com/quote/{}/news", spec.symbol);

    vec![
        Article::new(
            format!("{} ({}) in focus as traders watch {topic}", spec.name, spec.symbol),
            format_timestamp(now - Duration::minutes(5)),
        )
        .with_description(format!(
            "Market participants are tracking {} amid ongoing moves in {topic}.",
            spec.name
        ))
        .with_url(quote_url.clone())
        .with_source("Market Digest")
        .with_symbol(spec.symbol.clone()),
        Article::new(
            format!("What to watch next for {}", spec.name),
            format_timestamp(now - Duration::hours(4)),
        )
        .with_description(format!(
            "A look at recent price action and upcoming catalysts for {}.",
            spec.symbol
        ))
        .with_url(quote_url)
        .with_source("Market Digest")
        .with_symbol(spec.symbol.clone()),
    ]
}
