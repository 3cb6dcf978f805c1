//! Gateway error types and HTTP mappings.
//!
//! Two error kinds exist at the surface: client errors (bad model selection,
//! 400) and upstream errors (anything that went wrong talking to a backend,
//! 500 or the mirrored status from the local daemon). All failures become a
//! JSON envelope `{"detail": "..."}`; nothing is retried or handled below
//! the route handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use chatgate_ollama::OllamaError;
use chatgate_openai::OpenAiError;

/// Gateway-level error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (unsupported model, empty message list).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The local daemon answered with a non-2xx status; mirror it.
    #[error("Upstream error {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// Any other backend failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Upstream { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                detail,
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorBody { detail })).into_response()
    }
}

impl From<OpenAiError> for HttpError {
    fn from(err: OpenAiError) -> Self {
        // Every cloud provider failure is a plain 500 with the raw error
        // text; the provider's own status is not mirrored.
        Self::Internal(err.to_string())
    }
}

impl From<OllamaError> for HttpError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Api { status, .. } => Self::Upstream {
                status,
                detail: err.to_string(),
            },
            OllamaError::Network(_) | OllamaError::InvalidResponse { .. } => {
                Self::Internal(err.to_string())
            }
        }
    }
}
