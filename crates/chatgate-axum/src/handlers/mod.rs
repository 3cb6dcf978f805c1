//! Route handlers, one module per backend surface.

pub mod chat;
pub mod models;
pub mod ollama;

use serde::Serialize;

/// Wrapper for model-listing responses: `{"models": [...]}`.
#[derive(Debug, Serialize)]
pub struct ModelList<T> {
    pub models: Vec<T>,
}
