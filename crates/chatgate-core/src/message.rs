//! Normalized request and response shapes for the gateway.
//!
//! Both backends share one `Message` shape even though each uses a subset of
//! its fields (`images` is ignored by the cloud adapter, `model` is carried
//! per-message by some frontends but routing always uses the request-level
//! field). Nothing here outlives a single request/response cycle.

use serde::{Deserialize, Serialize};

/// One turn in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "system", "user", or "assistant".
    pub role: String,
    /// Text content of the turn.
    pub content: String,
    /// Optional per-message model hint (not used for routing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Optional base64-encoded images for vision models.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// A chat request: an ordered conversation plus the model that routes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation turns, in order.
    pub messages: Vec<Message>,
    /// Model identifier; selects the backend and request formatting.
    pub model: String,
}

/// The uniform success envelope returned by every chat route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text, or a Markdown image embed for image models.
    pub message: String,
    /// Always "success"; failures use the error envelope instead.
    pub status: String,
}

impl ChatResponse {
    /// Wrap a generated message in the success envelope.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "success".to_string(),
        }
    }
}

/// Whether a model produces chat text or images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Chat,
    Image,
}

/// A name/kind pair describing an available model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModelKind,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
