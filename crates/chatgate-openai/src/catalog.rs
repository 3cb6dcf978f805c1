//! Static catalog of supported cloud models.
//!
//! The cloud provider's model list is a hardcoded enumeration, unlike the
//! local adapter which discovers models by querying the daemon.

use chatgate_core::{ModelDescriptor, ModelKind};

/// The only chat model the gateway accepts for the cloud backend.
pub const CHAT_MODEL: &str = "gpt-4o-mini";

/// The only image model the gateway accepts for the cloud backend.
pub const IMAGE_MODEL: &str = "dall-e-3";

/// The static model list served by `GET /api/openai/models`.
pub fn supported_models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new(CHAT_MODEL, ModelKind::Chat),
        ModelDescriptor::new(IMAGE_MODEL, ModelKind::Image),
    ]
}
