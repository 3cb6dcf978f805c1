//! Axum HTTP gateway for chatgate.
//!
//! Exposes the uniform REST surface (`/api/chat`, `/api/openai/models`,
//! `/api/ollama/models`, `/api/ollama/chat`) and dispatches to the cloud and
//! local adapters. Handlers hold no state of their own; everything they need
//! lives in the [`bootstrap::GatewayContext`] injected via axum `State`.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use bootstrap::{CorsConfig, GatewayContext, ServerConfig, bootstrap};
pub use routes::create_router;
pub use server::serve;
