//! Error types for the index fetch.

use thiserror::Error;

/// Errors that can occur while fetching and decoding the search index.
///
/// These never escape the store: a failed load degrades to an empty index
/// and the error is logged, not propagated. The type exists so the inner
/// fetch stays an honest `Result` and tests can assert on the failure mode.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error during HTTP communication.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("index request failed with status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of page records.
    #[error("invalid index payload: {0}")]
    Decode(#[from] serde_json::Error),
}
