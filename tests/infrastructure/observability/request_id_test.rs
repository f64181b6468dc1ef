use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Router, middleware};
use tower::ServiceExt;

use doc2quiz::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn app() -> Router {
    Router::new()
        .route(
            "/",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_generates_uuid() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&header).is_ok());

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, header.as_bytes());
}

#[tokio::test]
async fn given_empty_request_id_when_handling_then_replaces_it() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(header).is_ok());
}

#[tokio::test]
async fn given_caller_request_id_when_handling_then_exposes_it_to_handler() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "trace-7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-7");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"trace-7");
}

#[tokio::test]
async fn given_oversized_request_id_when_handling_then_generates_fresh_one() {
    let oversized = "a".repeat(129);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, oversized.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert_ne!(header, oversized);
    assert!(uuid::Uuid::parse_str(header).is_ok());
}

#[test]
fn given_header_with_spaces_when_reading_then_rejects_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, "two words".parse().unwrap());

    assert_eq!(RequestId::from_headers(&headers), None);

    headers.insert(REQUEST_ID_HEADER, "abc-123".parse().unwrap());
    assert_eq!(
        RequestId::from_headers(&headers),
        Some(RequestId("abc-123".to_string()))
    );
}
