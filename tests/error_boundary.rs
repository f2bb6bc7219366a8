//! Global fallback boundary tests: failures that escape local handling must
//! still produce a sanitized response with explicit CORS headers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use secure_error_service::startup::{build_router, with_error_boundary};
use tower::util::ServiceExt;

const FALLBACK_BODY: &str = r#"{"message":"An unexpected internal server error occurred. Please contact support if the issue persists."}"#;
const LOCAL_GENERIC_BODY: &str =
    r#"{"message":"An internal server error occurred. Please try again later."}"#;

// Explicit return type so the panicking body does not rely on never-type
// fallback, which current stable rejects in handler closures.
async fn panicking_handler() -> &'static str {
    panic!("simulated framework failure")
}

/// Routes simulating failures outside any local boundary: a handler panic and
/// a framework-level 500 response.
fn faulty_router() -> Router {
    with_error_boundary(
        Router::new()
            .route("/panic", get(panicking_handler))
            .route(
                "/raw-500",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "bare failure detail") }),
            )
            .route("/ok", get(|| async { "fine" })),
    )
}

async fn get_path(app: Router, path: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn panic_is_converted_to_fallback_response() {
    let (status, headers, body) = get_path(faulty_router(), "/panic").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FALLBACK_BODY);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert!(!body.contains("simulated framework failure"));
}

#[tokio::test]
async fn unmarked_500_is_sanitized() {
    let (status, headers, body) = get_path(faulty_router(), "/raw-500").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, FALLBACK_BODY);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert!(!body.contains("bare failure detail"));
}

#[tokio::test]
async fn non_500_responses_pass_through() {
    let (status, _, body) = get_path(faulty_router(), "/ok").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "fine");
}

#[tokio::test]
async fn locally_handled_errors_keep_the_local_message() {
    let response = build_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/error/trigger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), LOCAL_GENERIC_BODY);
}
