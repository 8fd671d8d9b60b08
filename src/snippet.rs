//! Snippet extraction.
//!
//! A snippet is a short window of page content shown under each result,
//! centered on the first query token that occurs in the content. Tokens are
//! scanned in *query order*: the first token with any occurrence wins, even
//! if a later token occurs earlier in the text. When no token occurs in the
//! content at all (a page that matched on title alone, or an empty body) the
//! snippet falls back to the opening of the content.
//!
//! # Unicode Support
//!
//! All offsets and window bounds are **character offsets**, not byte
//! offsets, so a window never splits a multi-byte UTF-8 sequence. Slicing
//! goes through `chars()` rather than byte ranges for the same reason.

/// Characters of context kept before the matched token.
pub const SNIPPET_BEFORE: usize = 60;

/// Characters of context kept after the start of the matched token.
pub const SNIPPET_AFTER: usize = 120;

/// Characters of content returned when no token is found in the body.
pub const SNIPPET_FALLBACK_LEN: usize = 180;

/// Ellipsis marker glued onto truncated window edges.
const ELLIPSIS: char = '…';

/// Extract a display snippet from raw (non-lowercased) content.
///
/// `tokens` must already be lowercase. The returned snippet is plain text;
/// HTML escaping happens at render time.
pub fn extract_snippet(content: &str, tokens: &[String]) -> String {
    let lowered = content.to_lowercase();

    // First token (in query order) with an occurrence anchors the window.
    let anchor = tokens
        .iter()
        .find_map(|token| lowered.find(token.as_str()))
        .map(|byte_pos| lowered[..byte_pos].chars().count());

    let Some(pos) = anchor else {
        return content.chars().take(SNIPPET_FALLBACK_LEN).collect();
    };

    let total = content.chars().count();
    // Lowercasing can expand a handful of characters; clamp so the window
    // still indexes into the raw text.
    let pos = pos.min(total);

    let start = pos.saturating_sub(SNIPPET_BEFORE);
    let end = (pos + SNIPPET_AFTER).min(total);

    let window: String = content.chars().skip(start).take(end - start).collect();
    let mut snippet = window.trim().to_string();

    if start > 0 {
        snippet.insert(0, ELLIPSIS);
    }
    if end < total {
        snippet.push(ELLIPSIS);
    }
    snippet
}
