use market_digest::news::relevance_score;
use market_digest::{AssetClass, AssetSpec, best_headline};

use crate::common::article;

#[test]
fn symbol_in_title_description_and_url_path_adds_up() {
    let a = article("Nvidia (NVDA) extends rally", "2026-10-15T10:00:00Z")
        .with_description("nvda closed at a record")
        .with_url("https://finance.yahoo.com/quote/NVDA/news");
    assert_eq!(relevance_score("NVDA", &a), 40 + 20 + 25);
}

#[test]
fn symbol_must_match_a_whole_word() {
    let a = article("METAL prices climb; METAVERSE spending slows", "2026-10-15T10:00:00Z")
        .with_url("https://example.com/markets/metals");
    assert_eq!(relevance_score("META", &a), 0);
}

#[test]
fn rival_tickers_in_the_title_cost_points() {
    let a = article("AMD and NVDA trade blows over AI chips", "2026-10-15T10:00:00Z");
    assert_eq!(relevance_score("AMD", &a), 40 - 15);

    let unrelated = article("TSLA deliveries beat", "2026-10-15T10:00:00Z");
    assert_eq!(relevance_score("AMD", &unrelated), -15);
}

#[test]
fn best_headline_prefers_the_most_specific_article() {
    let articles = vec![
        article("Chip stocks slide", "2026-10-15T12:00:00Z"),
        article("AMD vs INTC: who wins the server market", "2026-10-15T11:00:00Z"),
        article("AMD unveils new accelerator", "2026-10-15T10:00:00Z")
            .with_url("https://example.com/quote/AMD"),
    ];
    let best = best_headline("AMD", &articles).unwrap();
    assert_eq!(best.title, "AMD unveils new accelerator");
}

#[test]
fn best_headline_keeps_the_earlier_article_on_ties() {
    let articles = vec![
        article("BTC-USD tops resistance", "2026-10-15T12:00:00Z"),
        article("BTC-USD funding rates rise", "2026-10-15T11:00:00Z"),
    ];
    assert_eq!(
        best_headline("btc-usd", &articles).unwrap().title,
        "BTC-USD tops resistance"
    );
}

#[test]
fn best_headline_is_none_without_a_positive_score() {
    let articles = vec![
        article("Markets drift ahead of Fed", "2026-10-15T12:00:00Z"),
        article("", "2026-10-15T11:00:00Z").with_url("https://example.com/quote/AAPL"),
    ];
    assert!(best_headline("AAPL", &articles).is_none());
    assert!(best_headline("AAPL", &[]).is_none());
}

#[test]
fn synthetic_articles_always_yield_a_headline() {
    let spec = AssetSpec::new("GLD", "SPDR Gold Shares", AssetClass::Commodity);
    let articles = market_digest::news::synthetic_news(&spec, chrono::Utc::now());
    let best = best_headline("GLD", &articles).unwrap();
    assert_eq!(best.title, articles[0].title);
}
