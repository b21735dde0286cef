//! Configuration types for the HTTP list fetcher.

use std::time::Duration;

use url::Url;

/// Complete fetcher configuration.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base that relative `fetch_url`s are joined onto.
    ///
    /// Joining follows URL rules: with a base of `https://host/api/`, the
    /// source `teams` resolves to `https://host/api/teams` and `/teams` to
    /// `https://host/teams`. Absolute sources ignore the base.
    pub base_url: Option<Url>,
    /// Network timeout settings.
    pub timeouts: FetchTimeouts,
    /// Retry settings for transient failures.
    pub retry: RetryConfig,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Largest response body accepted, in bytes.
    pub max_body_bytes: usize,
    /// Honour the `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` environment variables.
    pub system_proxy: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeouts: FetchTimeouts::default(),
            retry: RetryConfig::default(),
            user_agent: concat!("slash-complete/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: 1024 * 1024,
            system_proxy: true,
        }
    }
}

impl FetchConfig {
    /// Set the base URL (builder pattern).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }
}

/// Timeout settings for list requests.
///
/// Suggestions are computed while the user types, so the defaults are short:
/// - `connect`: 2s
/// - `request`: 5s (whole request, including reading the body)
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct FetchTimeouts {
    /// Maximum time to wait for the TCP (and TLS) connection.
    pub connect: Duration,
    /// Maximum time for the whole request.
    pub request: Duration,
}

impl Default for FetchTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(2),
            request: Duration::from_secs(5),
        }
    }
}

/// Retry settings for transient failures.
///
/// Uses exponential backoff with optional jitter. Only errors where
/// [`FetchClientError::is_retryable()`](crate::FetchClientError::is_retryable)
/// returns `true` are retried.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial attempt).
    pub max_attempts: u32,
    /// Initial delay between retries.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Whether to add random jitter to retry delays.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
            jitter: true,
        }
    }
}
