//! Engine configuration.
//!
//! Configuration is an explicit value handed to [`crate::engine::SearchEngine`]
//! at construction, not ambient global state. The only knob the deployment
//! actually overrides is the index URL, which defaults to the well-known
//! path the docs build publishes to.

/// Default location of the published search index.
pub const DEFAULT_INDEX_URL: &str = "/search.json";

/// Configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    index_url: String,
}

impl SearchConfig {
    /// Configuration with the default index location.
    pub fn new() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }

    /// Sets a custom index URL (useful for testing and non-root deployments).
    pub fn with_index_url(mut self, url: impl Into<String>) -> Self {
        self.index_url = url.into();
        self
    }

    /// The URL the index is fetched from.
    pub fn index_url(&self) -> &str {
        &self.index_url
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
