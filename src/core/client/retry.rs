use std::time::Duration;

use rand::Rng;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay to wait before retry number `attempt` (zero-based).
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        match self {
            Backoff::Fixed(d) => *d,
            Backoff::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = factor.powi(i32::try_from(attempt).unwrap_or(i32::MAX));
                let raw = base.as_secs_f64() * exp;
                let capped = raw.min(max.as_secs_f64());
                let secs = if *jitter {
                    capped * rand::thread_rng().gen_range(0.5..1.5)
                } else {
                    capped
                };
                Duration::from_secs_f64(secs.max(0.0))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
///
/// Retries stay inside a single provider step: once they are exhausted the
/// fetch chain moves on to the next provider.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 2,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(2),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: false,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    /// A policy that performs exactly one attempt.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub(crate) fn should_retry_status(&self, status: u16) -> bool {
        self.enabled && self.retry_on_status.contains(&status)
    }

    pub(crate) fn should_retry_error(&self, e: &reqwest::Error) -> bool {
        self.enabled
            && ((self.retry_on_timeout && e.is_timeout())
                || (self.retry_on_connect && e.is_connect()))
    }
}
