//! Shared helpers for gateway integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use chatgate_axum::bootstrap::{CorsConfig, GatewayContext, ServerConfig, bootstrap};
use chatgate_ollama::OllamaConfig;
use chatgate_openai::OpenAiConfig;

/// Build a gateway context pointing both adapters at the given base URLs.
pub fn test_context(openai_url: &str, ollama_url: &str) -> GatewayContext {
    let config = ServerConfig {
        port: 0,
        openai: OpenAiConfig::new()
            .with_base_url(openai_url)
            .with_api_key("sk-test"),
        ollama: OllamaConfig::new().with_base_url(ollama_url),
        cors: CorsConfig::AllowAll,
    };
    bootstrap(&config).expect("bootstrap failed")
}

/// Spawn a canned upstream service on an ephemeral port; returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Drive a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Drive a JSON POST request through the router.
pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> Response<axum::body::Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
