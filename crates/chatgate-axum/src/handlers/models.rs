//! Static cloud model listing.

use axum::Json;

use chatgate_core::ModelDescriptor;
use chatgate_openai::supported_models;

use super::ModelList;

/// Handle `GET /api/openai/models`: the hardcoded descriptor list.
pub async fn openai_models() -> Json<ModelList<ModelDescriptor>> {
    Json(ModelList {
        models: supported_models(),
    })
}
