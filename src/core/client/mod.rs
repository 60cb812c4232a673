//! Public client surface + builder.
//! Internals are split into `constants` (UA, endpoints, env names) and `retry` (backoff policy).

mod constants;
mod retry;

pub use constants::{ALPHA_VANTAGE_KEY_ENV, NEWSAPI_KEY_ENV};
pub use retry::{Backoff, RetryConfig};

use crate::core::DigestError;
use constants::{
    DEFAULT_BASE_ALPHA_VANTAGE, DEFAULT_BASE_CHART, DEFAULT_BASE_COINGECKO, DEFAULT_BASE_NEWSAPI,
    DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client shared by every provider in the quote and news chains.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct DigestClient {
    http: Client,
    base_chart: Url,
    base_alpha_vantage: Url,
    base_coingecko: Url,
    base_newsapi: Url,

    alpha_vantage_key: Option<String>,
    newsapi_key: Option<String>,

    retry: RetryConfig,
}

impl DigestClient {
    /// Create a new builder.
    pub fn builder() -> DigestClientBuilder {
        DigestClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_alpha_vantage(&self) -> &Url {
        &self.base_alpha_vantage
    }
    pub(crate) fn base_coingecko(&self) -> &Url {
        &self.base_coingecko
    }
    pub(crate) fn base_newsapi(&self) -> &Url {
        &self.base_newsapi
    }
    pub(crate) fn alpha_vantage_key(&self) -> Option<&str> {
        self.alpha_vantage_key.as_deref()
    }
    pub(crate) fn newsapi_key(&self) -> Option<&str> {
        self.newsapi_key.as_deref()
    }

    /// Whether the Alpha Vantage step of the equity chain is active.
    pub fn has_alpha_vantage(&self) -> bool {
        self.alpha_vantage_key.is_some()
    }

    /// Whether the NewsAPI step of the news chain is active.
    pub fn has_newsapi(&self) -> bool {
        self.newsapi_key.is_some()
    }

    /// Send a request, retrying transient failures according to the client's [`RetryConfig`].
    ///
    /// Non-retryable statuses are returned as-is; callers decide what a non-2xx means.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, DigestError> {
        let cfg = &self.retry;
        let mut attempt: u32 = 0;
        loop {
            let Some(this_try) = req.try_clone() else {
                return Ok(req.send().await?);
            };
            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.should_retry_status(status) {
                        tracing::debug!(status, attempt, url = %resp.url(), "retrying on status");
                    } else {
                        return Ok(resp);
                    }
                }
                Err(e) => {
                    if attempt < cfg.max_retries && cfg.should_retry_error(&e) {
                        tracing::debug!(error = %e, attempt, "retrying on transport error");
                    } else {
                        return Err(e.into());
                    }
                }
            }
            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DigestClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_alpha_vantage: Option<Url>,
    base_coingecko: Option<Url>,
    base_newsapi: Option<Url>,

    alpha_vantage_key: Option<String>,
    newsapi_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

fn non_blank(key: impl Into<String>) -> Option<String> {
    let key = key.into();
    let trimmed = key.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl DigestClientBuilder {
    /// Seed provider credentials from `ALPHA_VANTAGE_API_KEY` and `NEWSAPI_KEY`.
    ///
    /// Missing or blank variables leave the corresponding provider disabled.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            alpha_vantage_key: std::env::var(ALPHA_VANTAGE_KEY_ENV).ok().and_then(non_blank),
            newsapi_key: std::env::var(NEWSAPI_KEY_ENV).ok().and_then(non_blank),
            ..Self::default()
        }
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the Alpha Vantage query endpoint.
    #[must_use]
    pub fn base_alpha_vantage(mut self, url: Url) -> Self {
        self.base_alpha_vantage = Some(url);
        self
    }

    /// Override the CoinGecko API base.
    #[must_use]
    pub fn base_coingecko(mut self, url: Url) -> Self {
        self.base_coingecko = Some(url);
        self
    }

    /// Override the NewsAPI base.
    #[must_use]
    pub fn base_newsapi(mut self, url: Url) -> Self {
        self.base_newsapi = Some(url);
        self
    }

    /// Enable the Alpha Vantage fallback for non-crypto quotes. Blank keys are ignored.
    #[must_use]
    pub fn alpha_vantage_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_key = non_blank(key);
        self
    }

    /// Enable NewsAPI for per-symbol news. Blank keys are ignored.
    #[must_use]
    pub fn newsapi_key(mut self, key: impl Into<String>) -> Self {
        self.newsapi_key = non_blank(key);
        self
    }

    /// Set the per-request timeout. Default: 10 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the retry policy used for every provider call.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `DigestError` if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<DigestClient, DigestError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_alpha_vantage = match self.base_alpha_vantage {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_ALPHA_VANTAGE)?,
        };
        let base_coingecko = match self.base_coingecko {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_COINGECKO)?,
        };
        let base_newsapi = match self.base_newsapi {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWSAPI)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DigestClient {
            http,
            base_chart,
            base_alpha_vantage,
            base_coingecko,
            base_newsapi,
            alpha_vantage_key: self.alpha_vantage_key,
            newsapi_key: self.newsapi_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
