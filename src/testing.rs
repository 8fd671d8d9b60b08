//! Canonical test fixtures shared by unit and integration tests.

use crate::types::IndexedPage;

/// Build a fully-populated page record.
pub fn make_page(title: &str, content: &str, url: &str) -> IndexedPage {
    IndexedPage {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        url: Some(url.to_string()),
    }
}

/// The two-page fixture used by the ranking scenario tests: a title match
/// and a content-only match for the token "install".
pub fn install_fixture() -> Vec<IndexedPage> {
    vec![
        make_page(
            "Install",
            "Run the installer and follow prompts",
            "/install",
        ),
        make_page("FAQ", "Common install questions", "/faq"),
    ]
}
