//! Cloud chat and image-generation handler.

use axum::Json;
use axum::extract::State;
use tracing::{debug, error};

use chatgate_core::{ChatRequest, ChatResponse, sanitize};
use chatgate_openai::{CHAT_MODEL, ChatTurn, IMAGE_MODEL};

use crate::error::HttpError;
use crate::state::AppState;

/// Handle `POST /api/chat`.
///
/// `model == "dall-e-3"` treats the last message as an image prompt; any
/// other model must be the supported chat model exactly. Prompt content is
/// sanitized before it reaches the provider.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, HttpError> {
    debug!(model = %request.model, turns = request.messages.len(), "POST /api/chat");

    if request.model == IMAGE_MODEL {
        return generate_image(&state, &request).await;
    }

    if request.model != CHAT_MODEL {
        return Err(HttpError::BadRequest(format!(
            "For chat, currently only supporting {CHAT_MODEL} model"
        )));
    }

    let turns: Vec<ChatTurn> = request
        .messages
        .iter()
        .map(|msg| ChatTurn {
            role: msg.role.clone(),
            content: sanitize(&msg.content),
        })
        .collect();

    let message = state
        .openai
        .chat_completion(&request.model, turns)
        .await
        .inspect_err(|e| error!("OpenAI chat failed: {e}"))?;

    Ok(Json(ChatResponse::success(message)))
}

/// Image path: sanitize only the last message's content and return a
/// Markdown image embed wrapping the generated URL.
async fn generate_image(
    state: &AppState,
    request: &ChatRequest,
) -> Result<Json<ChatResponse>, HttpError> {
    let prompt = request
        .messages
        .last()
        .map(|msg| sanitize(&msg.content))
        .ok_or_else(|| {
            HttpError::BadRequest("Image generation requires at least one message".to_string())
        })?;

    let url = state
        .openai
        .generate_image(&prompt)
        .await
        .inspect_err(|e| error!("Image generation failed: {e}"))?;

    Ok(Json(ChatResponse::success(format!(
        "![Generated Image]({url})"
    ))))
}
