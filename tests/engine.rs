//! End-to-end tests for the engine against a mock index endpoint: lazy
//! loading, single-flight fetch de-duplication, and fail-closed behavior on
//! broken responses.

mod common;

use std::time::Duration;

use common::{engine_for, install_fixture, mount_index, INDEX_PATH};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn search_returns_ranked_results() {
    let server = MockServer::start().await;
    mount_index(&server, &install_fixture()).await;
    let engine = engine_for(&server);

    let results = engine.search("install").await;

    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, ["/install", "/faq"]);
    assert_eq!(results[0].title, "Install");
}

#[tokio::test]
async fn empty_query_returns_without_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(install_fixture()))
        .expect(0)
        .mount(&server)
        .await;
    let engine = engine_for(&server);

    assert!(engine.search("").await.is_empty());
    assert!(engine.search("   \t ").await.is_empty());
    assert!(!engine.is_loaded());
}

#[tokio::test]
async fn index_is_fetched_once_across_searches() {
    let server = MockServer::start().await;
    mount_index(&server, &install_fixture()).await; // expect(1)
    let engine = engine_for(&server);

    engine.ensure_loaded().await;
    assert!(engine.is_loaded());

    let first = engine.search("install").await;
    let second = engine.search("faq").await;
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    // expect(1) is verified when the server drops.
}

#[tokio::test]
async fn concurrent_searches_share_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(install_fixture())
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let engine = engine_for(&server);

    // Both arrive while the load is in flight; the second must await the
    // same pending fetch, not a partial index and not a second request.
    let (first, second) = tokio::join!(engine.search("install"), engine.search("install"));

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn http_error_degrades_to_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let engine = engine_for(&server);

    assert!(engine.search("anything").await.is_empty());
    assert!(engine.is_loaded());

    // The failure is terminal for the session: no retry on later searches.
    assert!(engine.search("anything else").await.is_empty());
}

#[tokio::test]
async fn undecodable_body_degrades_to_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>not json"))
        .mount(&server)
        .await;
    let engine = engine_for(&server);

    assert!(engine.search("anything").await.is_empty());
    assert!(engine.is_loaded());
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_empty_results() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let engine = docsearch::SearchEngine::new(
        docsearch::SearchConfig::new().with_index_url(format!("{uri}{INDEX_PATH}")),
    );

    assert!(engine.search("anything").await.is_empty());
    assert!(engine.is_loaded());
}

#[tokio::test]
async fn sparse_entries_render_with_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(INDEX_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"content":"untitled page body"},{"title":"No URL","content":"no url body"}]"#,
        ))
        .mount(&server)
        .await;
    let engine = engine_for(&server);

    let results = engine.search("body").await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Untitled");
    assert_eq!(results[0].url, "");
    assert_eq!(results[1].title, "No URL");
}
