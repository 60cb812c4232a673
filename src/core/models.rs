use serde::{Deserialize, Serialize};

use crate::core::DigestError;

/* ----- ASSETS (shared by quote/, news/, heroes/ and digest/) ----- */

/// Broad instrument class. Selects the quote provider chain and the hero bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Etf,
    Commodity,
    Crypto,
}

impl AssetClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Etf => "etf",
            AssetClass::Commodity => "commodity",
            AssetClass::Crypto => "crypto",
        }
    }

    /// Class assumed when a watchlist entry omits it: `-USD` pairs are crypto.
    pub fn infer(symbol: &str) -> Self {
        if symbol.to_ascii_uppercase().ends_with("-USD") {
            AssetClass::Crypto
        } else {
            AssetClass::Equity
        }
    }

    fn parse_loose(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "equity" | "stock" | "equities" => Some(AssetClass::Equity),
            "etf" | "fund" => Some(AssetClass::Etf),
            "commodity" | "commodities" => Some(AssetClass::Commodity),
            "crypto" | "cryptocurrency" | "digital_asset" => Some(AssetClass::Crypto),
            _ => None,
        }
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tradable instrument to track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub symbol: String,
    pub name: String,
    pub asset_class: AssetClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Provider-specific identifier, e.g. the CoinGecko coin id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

impl AssetSpec {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, asset_class: AssetClass) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            asset_class,
            industry: None,
            provider_id: None,
        }
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn with_provider_id(mut self, id: impl Into<String>) -> Self {
        self.provider_id = Some(id.into());
        self
    }
}

/* ----- WATCHLIST ----- */

/// A watchlist row: a real asset or a comment marker that is skipped everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WatchlistEntry {
    Asset(AssetSpec),
    Comment { text: String },
}

/// Ordered watchlist, already parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    pub entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        Self { entries }
    }

    /// Build from assets only.
    pub fn from_assets<I: IntoIterator<Item = AssetSpec>>(assets: I) -> Self {
        Self {
            entries: assets.into_iter().map(WatchlistEntry::Asset).collect(),
        }
    }

    /// Non-comment entries in input order.
    pub fn assets(&self) -> impl Iterator<Item = &AssetSpec> {
        self.entries.iter().filter_map(|e| match e {
            WatchlistEntry::Asset(a) => Some(a),
            WatchlistEntry::Comment { .. } => None,
        })
    }

    pub fn asset_count(&self) -> usize {
        self.assets().count()
    }

    /// Parse the `companies.json` shapes: a bare array, or an object whose
    /// `equities`, `companies`, `digital_assets`, `assets` and `items` arrays
    /// are concatenated in that order.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Json` on malformed JSON and `DigestError::Data` when
    /// an object has none of the recognized list keys or an entry is unusable.
    pub fn from_json_str(raw: &str) -> Result<Self, DigestError> {
        const LIST_KEYS: [&str; 5] = ["equities", "companies", "digital_assets", "assets", "items"];

        let value: serde_json::Value = serde_json::from_str(raw)?;
        let rows: Vec<serde_json::Value> = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(mut map) => {
                let mut rows = Vec::new();
                for key in LIST_KEYS {
                    if let Some(serde_json::Value::Array(items)) = map.remove(key) {
                        rows.extend(items);
                    }
                }
                if rows.is_empty() {
                    return Err(DigestError::Data(
                        "watchlist object did not contain a recognized list key".into(),
                    ));
                }
                rows
            }
            _ => return Err(DigestError::Data("unsupported watchlist structure".into())),
        };

        let entries = rows
            .into_iter()
            .map(|row| -> Result<WatchlistEntry, DigestError> {
                serde_json::from_value::<RawEntry>(row)?.into_entry()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    asset_class: Option<String>,
    #[serde(default, alias = "sector")]
    industry: Option<String>,
    #[serde(default, alias = "coingecko_id", alias = "id")]
    provider_id: Option<String>,
    #[serde(default, alias = "_comment")]
    comment: Option<String>,
}

impl RawEntry {
    fn into_entry(self) -> Result<WatchlistEntry, DigestError> {
        let symbol = self
            .symbol
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty());

        let Some(symbol) = symbol else {
            return match self.comment {
                Some(text) => Ok(WatchlistEntry::Comment { text }),
                None => Err(DigestError::Data(
                    "watchlist entry has neither symbol nor comment".into(),
                )),
            };
        };

        let asset_class = self
            .asset_class
            .as_deref()
            .and_then(AssetClass::parse_loose)
            .unwrap_or_else(|| AssetClass::infer(&symbol));

        Ok(WatchlistEntry::Asset(AssetSpec {
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| symbol.clone()),
            symbol,
            asset_class,
            industry: self.industry,
            provider_id: self.provider_id,
        }))
    }
}
