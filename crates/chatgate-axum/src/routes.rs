//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::bootstrap::{CorsConfig, GatewayContext};
use crate::handlers;
use crate::state::AppState;

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/openai/models", get(handlers::models::openai_models))
        .route("/ollama/models", get(handlers::ollama::models))
        .route("/ollama/chat", post(handlers::ollama::chat))
}

/// Create the main router with all API routes nested under `/api`.
pub fn create_router(ctx: GatewayContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state).layer(cors))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
