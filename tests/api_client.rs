//! HTTP client against a mock backend.

mod common;

use catfacts::api::{ApiError, CatFactsApi};
use common::mock_backend::{MockBackend, MockResponse};
use common::{client, free_port, TWO_FACTS};

#[tokio::test]
async fn test_list_facts_hits_catfacts() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(TWO_FACTS)).await;

    let facts = client(&mock.base_url()).list_facts().await.unwrap();

    assert_eq!(facts.len(), 2);
    assert_eq!(facts[0].id, 2);
    assert_eq!(facts[1].fact, "Cats purr.");
    assert_eq!(facts[1].created_at, "2024-07-12T09:30:00");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/catfacts");
}

#[tokio::test]
async fn test_create_fact_posts_form_field() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"id": 7, "fact": "Cats purr.", "created_at": "2024-07-14T08:00:00"}"#,
    ))
    .await;

    let saved = client(&mock.base_url())
        .create_fact("Cats purr.")
        .await
        .unwrap();
    assert_eq!(saved.id, 7);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/catfacts");
    assert_eq!(requests[0].body_text(), "fact=Cats+purr.");
    assert_eq!(
        requests[0].header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
}

#[tokio::test]
async fn test_rejection_carries_detail() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::detail(400, "Duplicate fact."))
        .await;

    let err = client(&mock.base_url())
        .create_fact("Cats purr.")
        .await
        .unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Duplicate fact."));
    assert_eq!(err.to_string(), "Backend returned 400: Duplicate fact.");
}

#[tokio::test]
async fn test_rejection_without_json_has_no_detail() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::status(500, "Internal Server Error"))
        .await;

    let err = client(&mock.base_url()).list_facts().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_random_fact() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"fact": "Cats have whiskers."}"#))
        .await;

    let random = client(&mock.base_url()).random_fact().await.unwrap();

    assert_eq!(random.fact, "Cats have whiskers.");
    assert_eq!(mock.captured_requests().await[0].path, "/catfacts/random");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"facts": []}"#))
        .await;

    let err = client(&mock.base_url()).list_facts().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_closed_port_is_connection_error() {
    let base_url = format!("http://127.0.0.1:{}", free_port());

    let err = client(&base_url).list_facts().await.unwrap_err();

    assert!(matches!(err, ApiError::Connection { .. }), "got {err:?}");
    assert!(!err.is_rejection());
}
