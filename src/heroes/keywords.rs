use serde::{Deserialize, Serialize};

use crate::core::{AssetClass, Watchlist};
use crate::news::Article;

/// Hero bucket. `Breaking` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breaking,
    Etf,
    Equity,
    Commodity,
    Crypto,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Breaking,
        Category::Etf,
        Category::Equity,
        Category::Commodity,
        Category::Crypto,
    ];

    /// Classifier evaluation order. Breaking is not listed: it catches what falls through.
    pub const PRIORITY: [Category; 4] = [
        Category::Etf,
        Category::Commodity,
        Category::Crypto,
        Category::Equity,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Breaking => "breaking",
            Category::Etf => "etf",
            Category::Equity => "equity",
            Category::Commodity => "commodity",
            Category::Crypto => "crypto",
        }
    }

    /// The asset class whose watchlist symbols/names seed this bucket.
    pub const fn asset_class(self) -> Option<AssetClass> {
        match self {
            Category::Breaking => None,
            Category::Etf => Some(AssetClass::Etf),
            Category::Equity => Some(AssetClass::Equity),
            Category::Commodity => Some(AssetClass::Commodity),
            Category::Crypto => Some(AssetClass::Crypto),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic domain terms added to each bucket on top of the watchlist keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryTerms {
    pub etf: Vec<String>,
    pub commodity: Vec<String>,
    pub crypto: Vec<String>,
    pub equity: Vec<String>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

impl Default for CategoryTerms {
    fn default() -> Self {
        Self {
            etf: owned(&["ETF", "INDEX", "FUND"]),
            commodity: owned(&["GOLD", "OIL", "SILVER", "CRUDE", "COMMODIT"]),
            crypto: owned(&["BITCOIN", "BLOCKCHAIN", "CRYPTO", "ETHEREUM"]),
            equity: owned(&["STOCK", "SHARES", "EARNINGS"]),
        }
    }
}

impl CategoryTerms {
    fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Etf => &self.etf,
            Category::Commodity => &self.commodity,
            Category::Crypto => &self.crypto,
            Category::Equity => &self.equity,
            Category::Breaking => &[],
        }
    }
}

/// Ordered `(category, keywords)` rules evaluated top-down; first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRules {
    rules: Vec<(Category, Vec<String>)>,
}

impl CategoryRules {
    /// Rules from explicit keyword sets, kept in the given order. Keywords are
    /// uppercased and blank ones dropped.
    pub fn new(rules: Vec<(Category, Vec<String>)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(cat, kws)| {
                let mut kws: Vec<String> = kws
                    .into_iter()
                    .map(|k| k.trim().to_uppercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                kws.dedup();
                (cat, kws)
            })
            .collect();
        Self { rules }
    }

    /// Rules in [`Category::PRIORITY`] order, each seeded with the uppercased
    /// symbols and names of the watchlist assets in that class plus `terms`.
    pub fn from_watchlist(watchlist: &Watchlist, terms: &CategoryTerms) -> Self {
        let rules = Category::PRIORITY
            .iter()
            .map(|&cat| {
                let mut kws: Vec<String> = watchlist
                    .assets()
                    .filter(|a| Some(a.asset_class) == cat.asset_class())
                    .flat_map(|a| [a.symbol.clone(), a.name.clone()])
                    .collect();
                kws.extend(terms.for_category(cat).iter().cloned());
                (cat, kws)
            })
            .collect();
        Self::new(rules)
    }

    pub fn keywords(&self, category: Category) -> Option<&[String]> {
        self.rules
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, k)| k.as_slice())
    }

    /// First bucket whose keywords occur in the article's uppercased title and description.
    pub fn classify(&self, article: &Article) -> Category {
        let text = article.search_text();
        self.rules
            .iter()
            .find(|(_, kws)| kws.iter().any(|k| text.contains(k.as_str())))
            .map_or(Category::Breaking, |(cat, _)| *cat)
    }
}
