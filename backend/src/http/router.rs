//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::DEFAULT_STATUS_PATH;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The viewer may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/queues", get(handlers::list_queues))
        .route("/status", get(handlers::get_status))
        .route("/schedule", get(handlers::get_schedule));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(DEFAULT_STATUS_PATH, post(handlers::grpc_get_status))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::provider::InMemoryStatusProvider;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Arc::new(InMemoryStatusProvider::new()));
        let _router = create_router(state);
    }
}
