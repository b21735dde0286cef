//! The dynamic list boundary.
//!
//! The engine never performs I/O itself. Dynamic list arguments hand their
//! `fetch_url` to a [`ListFetcher`] and match against whatever items come
//! back. Any closure `Fn(&str) -> Result<Vec<ListItem>, FetchError>` is a
//! fetcher, and [`MapFetcher`] serves fixed lists for tests and offline use.

use std::collections::BTreeMap;

use slash_complete_command_tree::ListItem;

/// Why a dynamic list could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The source could not be reached or refused the request.
    #[error("list source `{locator}` unreachable: {reason}")]
    Unreachable {
        /// The `fetch_url` that was requested.
        locator: String,
        /// Human-readable cause.
        reason: String,
    },

    /// The source answered, but not with a list of items.
    #[error("list source `{locator}` returned malformed data: {details}")]
    Malformed {
        /// The `fetch_url` that was requested.
        locator: String,
        /// Decoder error text.
        details: String,
    },
}

impl FetchError {
    /// The locator the failed fetch was for.
    pub fn locator(&self) -> &str {
        match self {
            FetchError::Unreachable { locator, .. } | FetchError::Malformed { locator, .. } => {
                locator
            }
        }
    }
}

/// Resolves a dynamic list source into concrete items.
pub trait ListFetcher {
    /// Load the items for `source`, in the order they should be offered.
    fn fetch(&self, source: &str) -> Result<Vec<ListItem>, FetchError>;
}

impl<F> ListFetcher for F
where
    F: Fn(&str) -> Result<Vec<ListItem>, FetchError>,
{
    fn fetch(&self, source: &str) -> Result<Vec<ListItem>, FetchError> {
        self(source)
    }
}

/// A fetcher backed by an in-memory map from source to items.
///
/// Sources with no entry fail as [`FetchError::Unreachable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapFetcher {
    lists: BTreeMap<String, Vec<ListItem>>,
}

impl MapFetcher {
    /// An empty fetcher; every source is unreachable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `items` for `source` (builder pattern).
    pub fn with_list(mut self, source: impl Into<String>, items: Vec<ListItem>) -> Self {
        self.insert(source, items);
        self
    }

    /// Register `items` for `source`, replacing any previous list.
    pub fn insert(&mut self, source: impl Into<String>, items: Vec<ListItem>) {
        self.lists.insert(source.into(), items);
    }

    /// Number of registered sources.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no source is registered.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Load a fixture document: a JSON object mapping each source to a list
    /// of items in the list-item wire format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let lists: BTreeMap<String, Vec<ListItem>> = serde_json::from_str(json)?;
        Ok(Self { lists })
    }
}

impl ListFetcher for MapFetcher {
    fn fetch(&self, source: &str) -> Result<Vec<ListItem>, FetchError> {
        self.lists
            .get(source)
            .cloned()
            .ok_or_else(|| FetchError::Unreachable {
                locator: source.to_string(),
                reason: "no list registered for this source".into(),
            })
    }
}
