//! Blocking HTTP list fetcher for slash-complete.
//!
//! [`HttpListFetcher`] implements the engine's [`ListFetcher`] boundary: it
//! resolves a dynamic list argument's `fetch_url`, performs a `GET` with
//! connect and request timeouts, retries transient failures with backoff,
//! and decodes the body as a JSON array of list items.
//!
//! ```no_run
//! use slash_complete_core::{CommandNode, Argument, suggest};
//! use slash_complete_fetch_client::{FetchConfig, HttpListFetcher};
//!
//! let tree = vec![
//!     CommandNode::new("join")
//!         .with_argument(Argument::dynamic_list("Team", "https://chat.example.test/teams")),
//! ];
//! let fetcher = HttpListFetcher::new(FetchConfig::default())?;
//! let result = suggest(&tree, "join pl", "", &fetcher);
//! # Ok::<(), slash_complete_fetch_client::FetchClientError>(())
//! ```

mod config;
mod error;
mod resolve;
mod retry;

pub use config::{FetchConfig, FetchTimeouts, RetryConfig};
pub use error::{FetchClientError, error_chain};
pub use resolve::resolve_fetch_url;

use std::io::Read;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use slash_complete_command_tree::ListItem;
use slash_complete_core::{FetchError, ListFetcher};
use url::Url;

/// A [`ListFetcher`] that loads list items over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpListFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpListFetcher {
    /// Build a fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchClientError> {
        if config.retry.max_attempts == 0 {
            return Err(FetchClientError::InvalidConfig(
                "max_attempts must be >= 1".into(),
            ));
        }
        if config.max_body_bytes == 0 {
            return Err(FetchClientError::InvalidConfig(
                "max_body_bytes must be >= 1".into(),
            ));
        }
        let mut builder = Client::builder()
            .connect_timeout(config.timeouts.connect)
            .timeout(config.timeouts.request)
            .user_agent(config.user_agent.as_str());
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FetchClientError::InvalidConfig(format!("HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// The configuration this fetcher was built with.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch and decode the list behind `source`.
    pub fn fetch_items(&self, source: &str) -> Result<Vec<ListItem>, FetchClientError> {
        let url = resolve_fetch_url(self.config.base_url.as_ref(), source)?;
        retry::retry_op(&self.config.retry, || self.fetch_once(&url))
    }

    fn fetch_once(&self, url: &Url) -> Result<Vec<ListItem>, FetchClientError> {
        tracing::debug!(%url, "fetching list items");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = read_limited(response, url, self.config.max_body_bytes)?;
        let items: Vec<ListItem> =
            serde_json::from_slice(&body).map_err(|source| FetchClientError::Malformed {
                url: url.to_string(),
                source,
            })?;
        tracing::debug!(%url, items = items.len(), "list items fetched");
        Ok(items)
    }
}

impl ListFetcher for HttpListFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<ListItem>, FetchError> {
        self.fetch_items(source)
            .map_err(|e| e.into_fetch_error(source))
    }
}

fn classify(url: &Url, source: reqwest::Error) -> FetchClientError {
    let url = url.to_string();
    if source.is_timeout() {
        FetchClientError::Timeout { url, source }
    } else if source.is_connect() {
        FetchClientError::Connect { url, source }
    } else {
        FetchClientError::Request { url, source }
    }
}

fn read_limited(response: Response, url: &Url, max: usize) -> Result<Vec<u8>, FetchClientError> {
    let too_large = || FetchClientError::TooLarge {
        url: url.to_string(),
        max,
    };
    if response
        .content_length()
        .is_some_and(|len| len > max as u64)
    {
        return Err(too_large());
    }

    let mut body = Vec::new();
    response
        .take((max as u64).saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|source| FetchClientError::Body {
            url: url.to_string(),
            source,
        })?;
    if body.len() > max {
        return Err(too_large());
    }
    Ok(body)
}
