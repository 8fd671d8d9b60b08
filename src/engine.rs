//! The async search entry point.
//!
//! [`SearchEngine`] ties the index store and the pure ranking pass together.
//! It is the only surface the rendering layer needs: `search` per keystroke,
//! `ensure_loaded` to warm the index when the search box gains focus.

use crate::config::SearchConfig;
use crate::query::Query;
use crate::search::rank;
use crate::store::IndexStore;
use crate::types::RenderableResult;

/// Live-search engine over a lazily-fetched documentation index.
#[derive(Debug)]
pub struct SearchEngine {
    store: IndexStore,
}

impl SearchEngine {
    /// Creates an engine for the configured index location.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            store: IndexStore::new(config),
        }
    }

    /// Rank the index against `raw_query` and return at most
    /// [`MAX_RESULTS`](crate::search::MAX_RESULTS) renderable results.
    ///
    /// A query with zero tokens returns an empty list immediately, without
    /// touching (or triggering) the index load. Otherwise the index is
    /// loaded lazily; searches that arrive during an in-flight load run
    /// once it settles rather than against a partial index. Never fails:
    /// a failed load behaves as an empty index.
    pub async fn search(&self, raw_query: &str) -> Vec<RenderableResult> {
        let query = Query::parse(raw_query);
        if query.is_empty() {
            return Vec::new();
        }

        let pages = self.store.pages().await;
        rank(pages, &query)
    }

    /// Warm the index ahead of the first keystroke (focus event).
    pub async fn ensure_loaded(&self) {
        let _ = self.store.pages().await;
    }

    /// True once the index load has settled (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }
}
