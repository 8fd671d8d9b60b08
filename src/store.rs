//! The index store: lazy, single-flight fetch of the page index.
//!
//! The index is fetched at most once per session. The first caller starts
//! the HTTP request; callers that arrive while it is in flight await the
//! same pending load instead of issuing a second fetch or reading a
//! partially-initialized index. After the load settles the cached slice is
//! returned directly.
//!
//! Failure is terminal and silent: a transport error, a non-success status,
//! or an undecodable body all leave a permanently empty index for the rest
//! of the session. Nothing is retried and nothing is surfaced to the caller;
//! the widget degrades to "no results".

use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::types::IndexedPage;

/// Lazily-fetched, immutable, session-lifetime page index.
#[derive(Debug)]
pub struct IndexStore {
    http_client: Client,
    config: SearchConfig,
    pages: OnceCell<Vec<IndexedPage>>,
}

impl IndexStore {
    /// Creates a store for the configured index URL. No I/O happens until
    /// the first [`pages`](Self::pages) call.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
            pages: OnceCell::new(),
        }
    }

    /// The loaded index, fetching it on first use.
    ///
    /// Idempotent and concurrent-safe: the `OnceCell` guarantees one fetch
    /// per session and parks concurrent callers on the in-flight load.
    pub async fn pages(&self) -> &[IndexedPage] {
        self.pages
            .get_or_init(|| async {
                match self.fetch_index().await {
                    Ok(pages) => {
                        debug!(url = %self.config.index_url(), count = pages.len(), "search index loaded");
                        pages
                    }
                    Err(error) => {
                        warn!(url = %self.config.index_url(), %error, "search index load failed, continuing with empty index");
                        Vec::new()
                    }
                }
            })
            .await
    }

    /// True once a load attempt (successful or not) has settled.
    pub fn is_loaded(&self) -> bool {
        self.pages.initialized()
    }

    async fn fetch_index(&self) -> Result<Vec<IndexedPage>, FetchError> {
        let response = self
            .http_client
            .get(self.config.index_url())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let pages: Vec<IndexedPage> = serde_json::from_str(&body)?;
        Ok(pages)
    }
}
