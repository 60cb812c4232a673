use serde::{Deserialize, Serialize};

use crate::news::Article;

const BULLISH: &[&str] = &[
    "growth",
    "profit",
    "beat",
    "strong",
    "bullish",
    "upgrade",
    "buy",
    "surge",
    "record",
    "outperform",
    "breakthrough",
    "innovation",
    "partnership",
    "expansion",
];

const BEARISH: &[&str] = &[
    "loss",
    "decline",
    "miss",
    "weak",
    "bearish",
    "downgrade",
    "sell",
    "crash",
    "lawsuit",
    "investigation",
    "regulatory",
    "competition",
    "pressure",
    "concerns",
];

/// Score above which news reads as bullish (and below the negation, bearish).
const LABEL_THRESHOLD: f64 = 0.25;
const CONFIDENCE_SCALE: f64 = 1.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Keyword sentiment over an asset's attached news.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    /// Mean per-article score in `[-1, 1]`.
    pub score: f64,
    pub label: SentimentLabel,
    /// `min(|score| * 1.8, 1)`.
    pub confidence: f64,
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

impl Sentiment {
    /// Articles without any keyword hit do not contribute to the mean.
    pub fn analyze(articles: &[Article]) -> Self {
        let scores: Vec<f64> = articles
            .iter()
            .filter_map(|a| {
                let text = format!("{} {}", a.title, a.description).to_lowercase();
                let bull = BULLISH.iter().filter(|w| text.contains(*w)).count();
                let bear = BEARISH.iter().filter(|w| text.contains(*w)).count();
                let total = bull + bear;
                (total > 0).then(|| (bull as f64 - bear as f64) / total as f64)
            })
            .collect();

        if scores.is_empty() {
            return Self::default();
        }

        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        let label = if avg > LABEL_THRESHOLD {
            SentimentLabel::Bullish
        } else if avg < -LABEL_THRESHOLD {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        };

        Self {
            score: round3(avg),
            label,
            confidence: round3((avg.abs() * CONFIDENCE_SCALE).min(1.0)),
        }
    }
}
