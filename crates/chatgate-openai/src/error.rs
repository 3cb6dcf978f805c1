//! Internal error types for OpenAI operations.
//!
//! These errors are internal to `chatgate-openai` and are mapped to HTTP
//! error responses at the gateway boundary.

use thiserror::Error;

/// Result type alias for OpenAI operations.
pub type OpenAiResult<T> = Result<T, OpenAiError>;

/// Errors related to OpenAI API operations.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// API request failed with an HTTP error status.
    #[error("OpenAI API request failed with status {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from OpenAI API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
