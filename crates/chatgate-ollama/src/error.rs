//! Internal error types for Ollama operations.
//!
//! The `Display` strings here become the `detail` field of the gateway's
//! error envelope, so their wording is part of the external contract.

use thiserror::Error;

/// Result type alias for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;

/// Errors related to Ollama API operations.
#[derive(Debug, Error)]
pub enum OllamaError {
    /// The daemon answered with a non-2xx status; the gateway mirrors it.
    #[error("Ollama API error: {body}")]
    Api {
        /// HTTP status code from the daemon
        status: u16,
        /// Response body text
        body: String,
    },

    /// Could not reach the daemon at all.
    #[error("Failed to communicate with Ollama: {0}")]
    Network(#[from] reqwest::Error),

    /// The daemon answered 2xx but the body was not the expected shape.
    #[error("Invalid response from Ollama: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },
}
