//! Utility functions for string processing.

/// Escape the five HTML-significant characters `& < > " '`.
///
/// Applied to titles and snippets before they are handed to the rendering
/// layer, so indexed content containing markup is displayed as text instead
/// of being interpreted as structure.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
