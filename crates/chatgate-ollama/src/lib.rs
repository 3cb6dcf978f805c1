//! Ollama client for the chatgate gateway.
//!
//! Talks to a same-host model-serving daemon over its HTTP API: tag listing
//! for model discovery and non-streaming chat, with base64 images forwarded
//! verbatim for vision models. Messages pass through without sanitization;
//! only the cloud adapter's prompts are rewritten.

#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod models;

pub use client::OllamaClient;
pub use config::OllamaConfig;
pub use error::{OllamaError, OllamaResult};
pub use models::OllamaMessage;
