//! Shared application state type.

use std::sync::Arc;

use crate::bootstrap::GatewayContext;

/// Application state shared across all handlers.
///
/// An Arc-wrapped [`GatewayContext`] holding the backend clients; read-only
/// after startup, so no locking is needed.
pub type AppState = Arc<GatewayContext>;
