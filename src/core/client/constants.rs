//! Centralized constants for default endpoints, credentials and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Alpha Vantage query endpoint.
pub(crate) const DEFAULT_BASE_ALPHA_VANTAGE: &str = "https://www.alphavantage.co/query";

/// CoinGecko public API base (`coins/markets` is joined onto it).
pub(crate) const DEFAULT_BASE_COINGECKO: &str = "https://api.coingecko.com/api/v3/";

/// NewsAPI base (`everything` is joined onto it).
pub(crate) const DEFAULT_BASE_NEWSAPI: &str = "https://newsapi.org/v2/";

/// Per-request timeout applied when the builder does not override it.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the Alpha Vantage key.
pub const ALPHA_VANTAGE_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Environment variable holding the NewsAPI key.
pub const NEWSAPI_KEY_ENV: &str = "NEWSAPI_KEY";
