//! Query parsing.
//!
//! A query is whatever is in the search box at the current keystroke. Parsing
//! lowercases it and splits on runs of whitespace; there is no stemming and
//! no operator syntax. An input of pure whitespace parses to zero tokens,
//! which downstream code treats as "clear the results".

/// A parsed search query: the raw input plus its lowercase tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    tokens: Vec<String>,
}

impl Query {
    /// Parse raw input into tokens: lowercase, split on whitespace, drop
    /// empty fragments.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Query {
            raw: raw.to_string(),
            tokens,
        }
    }

    /// The original input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercase tokens in input order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when the input contained no non-whitespace characters.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
