//! Fetch source to request URL resolution.

use url::{ParseError, Url};

use crate::FetchClientError;

/// Resolve a dynamic list `source` into an HTTP(S) request URL.
///
/// Absolute sources are used as-is; relative ones are joined onto `base`.
pub fn resolve_fetch_url(base: Option<&Url>, source: &str) -> Result<Url, FetchClientError> {
    let invalid = |reason: &str| FetchClientError::InvalidUrl {
        url: source.to_string(),
        reason: reason.to_string(),
    };

    let source = source.trim();
    if source.is_empty() {
        return Err(invalid("source is empty"));
    }

    let url = match Url::parse(source) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(source).map_err(|e| invalid(&e.to_string()))?,
            None => return Err(invalid("relative URL and no base URL configured")),
        },
        Err(e) => return Err(invalid(&e.to_string())),
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(&format!("unsupported scheme `{other}`"))),
    }
}
