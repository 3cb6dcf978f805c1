//! OpenAI client for the chatgate gateway.
//!
//! Covers the two provider calls the gateway dispatches: chat completions
//! and image generation. The gateway decides routing and sanitization; this
//! crate only speaks the provider's wire format and reports failures as
//! [`OpenAiError`] for the HTTP boundary to translate.

#![deny(unsafe_code)]

mod catalog;
mod client;
mod config;
mod error;
mod models;

pub use catalog::{CHAT_MODEL, IMAGE_MODEL, supported_models};
pub use client::OpenAiClient;
pub use config::OpenAiConfig;
pub use error::{OpenAiError, OpenAiResult};
pub use models::ChatTurn;
