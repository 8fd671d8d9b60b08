//! Live search for static documentation sites.
//!
//! This crate implements the query side of a docs-site search box: a
//! lazily-fetched JSON index of page records and a substring-scoring engine
//! that turns each keystroke into a bounded, ranked list of results with
//! highlighted snippets. Index construction and DOM rendering live
//! elsewhere; this crate owns everything between the raw input text and the
//! renderable result list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  config.rs  │────▶│   store.rs   │────▶│  engine.rs   │
//! │(SearchConfig│     │ (IndexStore, │     │(SearchEngine,│
//! │  index URL) │     │ lazy fetch)  │     │   search)    │
//! └─────────────┘     └──────────────┘     └──────┬───────┘
//!                                                 │
//!                     ┌───────────────────────────▼────────┐
//!                     │ query.rs → scoring.rs → search.rs  │
//!                     │ (tokenize,  score/filter,  rank)   │
//!                     │        snippet.rs + utils.rs       │
//!                     │   (context windows, HTML escape)   │
//!                     └────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use docsearch::{SearchConfig, SearchEngine};
//!
//! # async fn demo() {
//! let engine = SearchEngine::new(
//!     SearchConfig::new().with_index_url("https://docs.example.com/search.json"),
//! );
//!
//! let results = engine.search("install guide").await;
//! for result in results {
//!     println!("{} -> {}", result.title, result.url);
//! }
//! # }
//! ```
//!
//! The engine never fails outward: a missing or broken index degrades to an
//! empty result list, and malformed index entries render with placeholder
//! values.

// Module declarations
mod config;
mod engine;
mod error;
mod query;
mod scoring;
mod search;
mod snippet;
mod store;
pub mod testing;
mod types;
mod utils;
mod widget;

// Re-exports for public API
pub use config::{SearchConfig, DEFAULT_INDEX_URL};
pub use engine::SearchEngine;
pub use error::FetchError;
pub use query::Query;
pub use scoring::{score_page, CONTENT_WEIGHT, TITLE_WEIGHT};
pub use search::{rank, MAX_RESULTS};
pub use snippet::{extract_snippet, SNIPPET_AFTER, SNIPPET_BEFORE, SNIPPET_FALLBACK_LEN};
pub use store::IndexStore;
pub use types::{IndexedPage, RenderableResult, ScoredPage};
pub use utils::escape_html;
pub use widget::{Display, IndexPhase, WidgetEvent, WidgetState};
