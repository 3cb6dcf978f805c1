//! Core domain types shared by the chatgate adapters.
//!
//! This crate holds the normalized request/response shapes that both the
//! cloud (OpenAI) and local (Ollama) adapters consume, plus the pure
//! [`sanitize`] function applied to outbound prompt content. It carries no
//! HTTP or runtime dependencies.

#![deny(unsafe_code)]

pub mod message;
pub mod sanitize;

pub use message::{ChatRequest, ChatResponse, Message, ModelDescriptor, ModelKind};
pub use sanitize::sanitize;
