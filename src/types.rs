//! The building blocks of the search pipeline.
//!
//! An index is a JSON array of [`IndexedPage`] records produced by the docs
//! build. Every field is optional on the wire: real-world indexes contain
//! entries with missing titles or empty bodies, and the engine is expected to
//! degrade rather than reject them.
//!
//! # Invariants
//!
//! - The loaded index is an ordered, read-only sequence. Nothing mutates it
//!   after the fetch settles, so references into it stay valid for the life
//!   of the session.
//! - `RenderableResult.title` and `.snippet` are already HTML-escaped and
//!   safe to splice into markup. `.url` is passed through untouched.

use serde::{Deserialize, Serialize};

/// One searchable documentation page, as it appears in the JSON index.
///
/// No field is required. A page with a missing `url` still ranks and renders,
/// it just produces an unusable link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedPage {
    /// Page title, shown as the result heading. Absent titles render as
    /// "Untitled".
    #[serde(default)]
    pub title: Option<String>,

    /// Plain-text body used for matching and snippet extraction.
    #[serde(default)]
    pub content: Option<String>,

    /// Destination link for the result. Not validated.
    #[serde(default)]
    pub url: Option<String>,
}

impl IndexedPage {
    /// Title as matched against, empty when absent.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Content as matched against, empty when absent.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// A page paired with its score for the current query. Borrows from the
/// store; recomputed on every keystroke and discarded after ranking.
#[derive(Debug, Clone, Copy)]
pub struct ScoredPage<'a> {
    pub page: &'a IndexedPage,
    pub score: u32,
}

/// A ranked result ready for the presentation layer.
///
/// `title` and `snippet` are HTML-escaped; `url` is the raw index value
/// (empty string when the entry had none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}
