//! The ranking pass: score, sort, truncate, render.
//!
//! This is the pure core of the engine. It takes a loaded page slice and a
//! parsed query and produces the bounded result list; fetching and caching
//! live in [`crate::store`], and the async entry point in [`crate::engine`].

use crate::query::Query;
use crate::scoring::score_page;
use crate::snippet::extract_snippet;
use crate::types::{IndexedPage, RenderableResult, ScoredPage};
use crate::utils::escape_html;

/// Maximum number of results returned for any query.
pub const MAX_RESULTS: usize = 8;

/// Title shown for pages whose index entry has none.
const UNTITLED: &str = "Untitled";

/// Rank the index against a parsed query.
///
/// Returns at most [`MAX_RESULTS`] results in non-increasing score order.
/// The sort is stable, so pages with equal scores keep their index order.
/// A query with zero tokens returns nothing.
pub fn rank(pages: &[IndexedPage], query: &Query) -> Vec<RenderableResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredPage<'_>> = pages
        .iter()
        .filter_map(|page| score_page(page, query.tokens()))
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);

    scored
        .into_iter()
        .map(|entry| to_renderable(entry.page, query))
        .collect()
}

fn to_renderable(page: &IndexedPage, query: &Query) -> RenderableResult {
    let title = match page.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => UNTITLED,
    };
    let snippet = extract_snippet(page.content_text(), query.tokens());

    RenderableResult {
        title: escape_html(title),
        url: page.url.clone().unwrap_or_default(),
        snippet: escape_html(&snippet),
    }
}
