//! Typed error types for the HTTP list fetcher.

use std::io;

use slash_complete_core::FetchError;

/// HTTP list fetch failures, categorized by type.
///
/// Use [`FetchClientError::is_retryable()`] to classify transient vs
/// permanent failures.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FetchClientError {
    // -- Address --
    /// The fetch source could not be turned into an HTTP(S) URL.
    #[error("invalid list URL `{url}`: {reason}")]
    InvalidUrl {
        /// The source as declared on the argument.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    // -- Transport --
    /// The connection could not be established.
    #[error("cannot connect to {url}")]
    Connect {
        /// The resolved request URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request did not finish within the configured timeouts.
    #[error("request to {url} timed out")]
    Timeout {
        /// The resolved request URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request failed for a reason other than connect or timeout.
    #[error("request to {url} failed")]
    Request {
        /// The resolved request URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    // -- Response --
    /// The server answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Status {
        /// The resolved request URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Reading the response body failed.
    #[error("reading response from {url} failed")]
    Body {
        /// The resolved request URL.
        url: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The response body exceeded the configured limit.
    #[error("response from {url} exceeds {max} bytes")]
    TooLarge {
        /// The resolved request URL.
        url: String,
        /// Configured maximum body size in bytes.
        max: usize,
    },

    /// The body is not a JSON array of list items.
    #[error("response from {url} is not a list of items")]
    Malformed {
        /// The resolved request URL.
        url: String,
        /// The decoder error.
        #[source]
        source: serde_json::Error,
    },

    // -- Retry --
    /// All retry attempts have been exhausted.
    #[error("retries exhausted after {attempts} attempts")]
    RetriesExhausted {
        /// Total number of attempts made.
        attempts: u32,
        /// The error from the final attempt.
        #[source]
        last_error: Box<FetchClientError>,
    },

    // -- Configuration --
    /// An invalid configuration was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FetchClientError {
    /// Whether this error is transient and the request may succeed if retried.
    ///
    /// Connect failures, timeouts, 5xx responses and `429 Too Many Requests`
    /// are retryable. Everything else is permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchClientError::Connect { .. } | FetchClientError::Timeout { .. } => true,
            FetchClientError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// The URL the failed request was for, if one was known.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchClientError::InvalidUrl { url, .. }
            | FetchClientError::Connect { url, .. }
            | FetchClientError::Timeout { url, .. }
            | FetchClientError::Request { url, .. }
            | FetchClientError::Status { url, .. }
            | FetchClientError::Body { url, .. }
            | FetchClientError::TooLarge { url, .. }
            | FetchClientError::Malformed { url, .. } => Some(url),
            FetchClientError::RetriesExhausted { last_error, .. } => last_error.url(),
            FetchClientError::InvalidConfig(_) => None,
        }
    }

    /// The innermost error, looking through `RetriesExhausted`.
    pub fn root(&self) -> &FetchClientError {
        match self {
            FetchClientError::RetriesExhausted { last_error, .. } => last_error.root(),
            other => other,
        }
    }

    /// Map onto the engine's fetch boundary, naming `locator` as the source.
    pub fn into_fetch_error(self, locator: impl Into<String>) -> FetchError {
        let locator = locator.into();
        let details = error_chain(&self);
        match self.root() {
            FetchClientError::Malformed { .. } | FetchClientError::TooLarge { .. } => {
                FetchError::Malformed { locator, details }
            }
            _ => FetchError::Unreachable {
                locator,
                reason: details,
            },
        }
    }
}

impl From<FetchClientError> for FetchError {
    fn from(err: FetchClientError) -> Self {
        let locator = err.url().unwrap_or_default().to_string();
        err.into_fetch_error(locator)
    }
}

/// The error's message followed by each of its sources, `: `-separated.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}
