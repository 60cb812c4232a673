use market_digest::{Article, Sentiment, SentimentLabel};

use crate::common::article;

#[test]
fn bullish_headlines_score_positive() {
    let news = vec![
        article("Chipmaker posts record profit, analysts upgrade", "2026-10-15T10:00:00Z"),
        article("Strong growth lifts outlook", "2026-10-15T09:00:00Z"),
    ];
    let s = Sentiment::analyze(&news);
    assert_eq!(s.label, SentimentLabel::Bullish);
    assert_eq!(s.score, 1.0);
    assert_eq!(s.confidence, 1.0);
}

#[test]
fn bearish_headlines_score_negative() {
    let news = vec![
        article("Regulator opens investigation after weak quarter", "2026-10-15T10:00:00Z"),
        article("Shares decline on downgrade", "2026-10-15T09:00:00Z")
            .with_description("Analysts cite pricing pressure."),
    ];
    let s = Sentiment::analyze(&news);
    assert_eq!(s.label, SentimentLabel::Bearish);
    assert!(s.score < -0.25);
    assert!(s.confidence > 0.0 && s.confidence <= 1.0);
}

#[test]
fn mixed_or_silent_news_is_neutral() {
    let mixed = vec![article("Strong sales offset by lawsuit", "2026-10-15T10:00:00Z")];
    let s = Sentiment::analyze(&mixed);
    assert_eq!(s.label, SentimentLabel::Neutral);
    assert_eq!(s.score, 0.0);

    let silent = vec![article("Company schedules annual meeting", "2026-10-15T10:00:00Z")];
    assert_eq!(Sentiment::analyze(&silent), Sentiment::default());
    assert_eq!(Sentiment::analyze(&[] as &[Article]), Sentiment::default());
}

#[test]
fn articles_without_keywords_do_not_dilute_the_mean() {
    let news = vec![
        article("Earnings beat estimates", "2026-10-15T10:00:00Z"),
        article("CEO to speak at conference", "2026-10-15T09:00:00Z"),
    ];
    let s = Sentiment::analyze(&news);
    assert_eq!(s.score, 1.0);
    assert_eq!(s.label, SentimentLabel::Bullish);
}
