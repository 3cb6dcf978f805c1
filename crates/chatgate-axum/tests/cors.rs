//! Integration tests for CORS preflight handling on the API routes.
//!
//! The default configuration is fully permissive (wildcard origin, methods,
//! and headers; no credentials); an explicit origin list restricts the
//! allow-origin header to listed origins only.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use chatgate_axum::bootstrap::CorsConfig;
use chatgate_axum::routes::create_router;

use common::test_context;

const DEAD_OPENAI: &str = "http://127.0.0.1:9/v1";
const DEAD_OLLAMA: &str = "http://127.0.0.1:9";

const FRONTEND_ORIGIN: &str = "http://frontend.localhost:3000";

/// Drive an OPTIONS preflight for a POST through the router.
async fn preflight(app: Router, uri: &str, origin: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

fn allow_origin(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
}

/// Some CORS middleware answers preflights with 204 instead of 200.
fn assert_preflight_status(status: StatusCode) {
    assert!(
        status == StatusCode::OK || status == StatusCode::NO_CONTENT,
        "preflight should return 200 or 204, got: {status}"
    );
}

#[tokio::test]
async fn preflight_allows_any_origin_by_default() {
    let app = create_router(test_context(DEAD_OPENAI, DEAD_OLLAMA), &CorsConfig::AllowAll);

    let response = preflight(app, "/api/chat", FRONTEND_ORIGIN).await;
    assert_preflight_status(response.status());
    assert_eq!(allow_origin(&response), Some("*"));
}

#[tokio::test]
async fn preflight_echoes_listed_origin() {
    let cors = CorsConfig::AllowOrigins(vec![FRONTEND_ORIGIN.to_string()]);
    let app = create_router(test_context(DEAD_OPENAI, DEAD_OLLAMA), &cors);

    let response = preflight(app, "/api/chat", FRONTEND_ORIGIN).await;
    assert_preflight_status(response.status());
    assert_eq!(allow_origin(&response), Some(FRONTEND_ORIGIN));
}

#[tokio::test]
async fn preflight_withholds_allow_origin_for_unlisted_origin() {
    let cors = CorsConfig::AllowOrigins(vec![FRONTEND_ORIGIN.to_string()]);
    let app = create_router(test_context(DEAD_OPENAI, DEAD_OLLAMA), &cors);

    let response = preflight(app, "/api/chat", "http://evil.localhost").await;
    assert!(
        allow_origin(&response).is_none(),
        "unlisted origin must not be echoed back"
    );
}

#[tokio::test]
async fn unparsable_origins_are_dropped_without_breaking_the_rest() {
    // "http://bad\norigin" is not a valid header value; it must be skipped
    // while the valid entry in the same list keeps working.
    let cors = CorsConfig::AllowOrigins(vec![
        "http://bad\norigin".to_string(),
        FRONTEND_ORIGIN.to_string(),
    ]);
    let app = create_router(test_context(DEAD_OPENAI, DEAD_OLLAMA), &cors);

    let response = preflight(app, "/api/chat", FRONTEND_ORIGIN).await;
    assert_preflight_status(response.status());
    assert_eq!(allow_origin(&response), Some(FRONTEND_ORIGIN));
}

#[tokio::test]
async fn actual_request_carries_allow_origin_header() {
    let app = create_router(test_context(DEAD_OPENAI, DEAD_OLLAMA), &CorsConfig::AllowAll);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/openai/models")
                .header(header::ORIGIN, FRONTEND_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));
}
