//! Scoring for page matches.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## ALL_TOKENS_MATCH
//! A page matches only if *every* token appears as a case-insensitive
//! substring in its title or its content. One missed token excludes the page
//! regardless of how well the others match.
//!
//! ## FIELD_WEIGHTS
//! Per token: title hit = +12, content hit = +3, both are additive when the
//! token appears in both fields. A title-only match on a single token (12)
//! must outrank any single-token content-only match (3), and the weights
//! keep that true for multi-token queries of equal length.

use crate::types::{IndexedPage, ScoredPage};

/// Score contribution for a token found in the title.
pub const TITLE_WEIGHT: u32 = 12;

/// Score contribution for a token found in the content.
pub const CONTENT_WEIGHT: u32 = 3;

/// Score a page against the query tokens.
///
/// Tokens must already be lowercase. Returns `None` when any token matches
/// neither field (short-circuits on the first miss), otherwise the summed
/// score.
pub fn score_page<'a>(page: &'a IndexedPage, tokens: &[String]) -> Option<ScoredPage<'a>> {
    // One lowercase pass per page per query.
    let title = page.title_text().to_lowercase();
    let content = page.content_text().to_lowercase();

    let mut score = 0u32;
    for token in tokens {
        let in_title = title.contains(token.as_str());
        let in_content = content.contains(token.as_str());

        if !in_title && !in_content {
            return None;
        }
        if in_title {
            score += TITLE_WEIGHT;
        }
        if in_content {
            score += CONTENT_WEIGHT;
        }
    }

    Some(ScoredPage { page, score })
}
