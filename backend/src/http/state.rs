//! Application state for the HTTP server.

use std::sync::Arc;

use crate::provider::StatusProvider;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of raw status samples
    pub provider: Arc<dyn StatusProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StatusProvider>) -> Self {
        Self { provider }
    }
}
