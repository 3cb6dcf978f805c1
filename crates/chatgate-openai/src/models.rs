//! OpenAI API data models for request/response handling.
//!
//! Domain types live in `chatgate-core`; this module holds the wire shapes
//! the provider expects. Only the fields the gateway actually uses are
//! modeled; unknown response fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A single chat turn in the provider's format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Message content.
    pub content: String,
}

/// Request to the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
}

/// Response from the chat-completions endpoint (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// A single chat completion choice.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatTurn,
}

/// Request to the image-generations endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub quality: String,
    pub n: u8,
}

/// Response from the image-generations endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageGenerationResponse {
    pub data: Vec<GeneratedImage>,
}

/// A single generated image.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeneratedImage {
    pub url: String,
}
