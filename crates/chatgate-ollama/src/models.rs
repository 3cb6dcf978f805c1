//! Ollama API data models for request/response handling.
//!
//! Domain types live in `chatgate-core`; this module holds the daemon's wire
//! shapes. The `images` field must be absent from the serialized JSON when a
//! message carries none; the daemon distinguishes "no images" from an empty
//! list.

use serde::{Deserialize, Serialize};

use chatgate_core::Message;

/// A chat message in the daemon's format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    /// Role, forwarded verbatim.
    pub role: String,
    /// Content, forwarded verbatim (no sanitization).
    pub content: String,
    /// Base64 image data for vision models, forwarded verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl From<Message> for OllamaMessage {
    fn from(msg: Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content,
            images: msg.images,
        }
    }
}

/// Request to the daemon's chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaMessage>,
    /// Always false; the daemon defaults to streaming otherwise.
    pub stream: bool,
}

/// Response from the daemon's chat endpoint (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OllamaChatResponse {
    pub message: OllamaMessage,
}

/// Response from the daemon's tag-listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TagsResponse {
    pub models: Vec<TagEntry>,
}

/// A single entry in the tag listing; only the name is used.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TagEntry {
    pub name: String,
}
