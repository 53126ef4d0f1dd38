//! HTTP API server
//!
//! This module exposes the two agent pipelines plus a welcome payload:
//! - GET / - Welcome payload
//! - POST /chat - Stream a chatbot reply as server-sent events
//! - POST /minute-writer/process - Audio upload in, meeting minutes out

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
