//! Local model discovery and chat dispatch handlers.

use axum::Json;
use axum::extract::State;
use tracing::{debug, error};

use chatgate_core::{ChatRequest, ChatResponse};
use chatgate_ollama::OllamaMessage;

use crate::error::HttpError;
use crate::state::AppState;

/// Handle `GET /api/ollama/models`.
///
/// A non-2xx answer from the daemon is mirrored (status and body text); a
/// connection failure is a 500 with a descriptive detail.
pub async fn models(State(state): State<AppState>) -> Result<Json<super::ModelList<String>>, HttpError> {
    debug!("GET /api/ollama/models");

    let models = state
        .ollama
        .list_models()
        .await
        .inspect_err(|e| error!("Failed to list Ollama models: {e}"))?;

    Ok(Json(super::ModelList { models }))
}

/// Handle `POST /api/ollama/chat`.
///
/// Role and content are forwarded verbatim (no sanitization); `images` pass
/// through as-is when present. Any failure, including a non-2xx from the
/// daemon, surfaces as a 500 here.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    debug!(model = %request.model, turns = request.messages.len(), "POST /api/ollama/chat");

    let messages: Vec<OllamaMessage> = request.messages.into_iter().map(Into::into).collect();

    let message = state
        .ollama
        .chat(&request.model, messages)
        .await
        .map_err(|e| {
            error!("Ollama chat failed: {e}");
            HttpError::Internal(e.to_string())
        })?;

    Ok(Json(ChatResponse::success(message)))
}
