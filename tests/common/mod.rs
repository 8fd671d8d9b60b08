//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsearch::{SearchConfig, SearchEngine};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Re-export canonical fixtures from docsearch::testing
pub use docsearch::testing::{install_fixture, make_page};

/// Path the test index is served under.
pub const INDEX_PATH: &str = "/search.json";

/// Mount `pages` as the JSON index on `server`, expecting at most one fetch.
pub async fn mount_index(server: &MockServer, pages: &[docsearch::IndexedPage]) {
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(pages))
        .expect(1)
        .mount(server)
        .await;
}

/// Engine wired to the mock server's index endpoint.
pub fn engine_for(server: &MockServer) -> SearchEngine {
    SearchEngine::new(
        SearchConfig::new().with_index_url(format!("{}{}", server.uri(), INDEX_PATH)),
    )
}
