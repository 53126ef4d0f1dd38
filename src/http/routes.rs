use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome payload
        .route("/", get(handlers::root))
        // Chat streaming
        .route("/chat", post(handlers::chat))
        // Meeting minutes generation
        .route("/minute-writer/process", post(handlers::process_meeting))
        // Audio uploads exceed axum's default body limit
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
