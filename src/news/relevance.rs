//! Picks the headline shown on an asset card.

use crate::news::Article;

/// Large-cap tickers that show up in each other's headlines.
const RIVALS: &[&str] = &[
    "NVDA", "AMD", "INTC", "TSLA", "AAPL", "MSFT", "META", "GOOGL", "AMZN",
];

const TITLE_HIT: i32 = 40;
const DESCRIPTION_HIT: i32 = 20;
const URL_HIT: i32 = 25;
const RIVAL_IN_TITLE: i32 = -15;

/// Only this much of the title and description is scanned.
const TITLE_SCAN: usize = 200;
const DESCRIPTION_SCAN: usize = 400;

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whether `word` occurs in `text` (ASCII case-insensitive), ending on a word
/// boundary and preceded by a byte accepted by `before`.
fn find_word(text: &str, word: &str, before: impl Fn(Option<u8>) -> bool) -> bool {
    if word.is_empty() {
        return false;
    }
    let text = text.to_ascii_uppercase();
    let word = word.to_ascii_uppercase();
    let bytes = text.as_bytes();
    text.match_indices(word.as_str()).any(|(i, _)| {
        let prev = i.checked_sub(1).map(|p| bytes[p]);
        let next = bytes.get(i + word.len()).copied();
        before(prev) && next.is_none_or(|b| !is_word_byte(b))
    })
}

fn mentions(text: &str, word: &str) -> bool {
    find_word(text, word, |prev| prev.is_none_or(|b| !is_word_byte(b)))
}

fn in_path(url: &str, word: &str) -> bool {
    find_word(url, word, |prev| prev == Some(b'/'))
}

fn head(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(end, _)| &text[..end])
}

/// How strongly `article` is about `symbol`. Zero or less means unrelated.
///
/// The symbol as a whole word in the title scores 40, in the description 20,
/// and as a URL path segment 25. Naming another large-cap ticker in the title
/// costs 15.
pub fn relevance_score(symbol: &str, article: &Article) -> i32 {
    let title = head(&article.title, TITLE_SCAN);
    let description = head(&article.description, DESCRIPTION_SCAN);

    let mut score = 0;
    if mentions(title, symbol) {
        score += TITLE_HIT;
    }
    if mentions(description, symbol) {
        score += DESCRIPTION_HIT;
    }
    if in_path(&article.url, symbol) {
        score += URL_HIT;
    }
    if RIVALS
        .iter()
        .any(|r| !r.eq_ignore_ascii_case(symbol) && mentions(title, r))
    {
        score += RIVAL_IN_TITLE;
    }
    score
}

/// The highest-scoring titled article for `symbol`, earliest on ties.
/// `None` when nothing scores above zero.
pub fn best_headline<'a>(symbol: &str, articles: &'a [Article]) -> Option<&'a Article> {
    articles
        .iter()
        .filter(|a| a.has_title())
        .map(|a| (relevance_score(symbol, a), a))
        .filter(|(score, _)| *score > 0)
        .fold(None, |best: Option<(i32, &Article)>, (score, a)| match best {
            Some((top, _)) if top >= score => best,
            _ => Some((score, a)),
        })
        .map(|(_, a)| a)
}
