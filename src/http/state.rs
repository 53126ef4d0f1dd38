use crate::llm::ModelBackend;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Hosted-model client, constructed once at startup and shared by every
    /// request. Stateless network client, so no teardown is needed.
    pub model: Arc<dyn ModelBackend>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelBackend>) -> Self {
        Self { model }
    }
}
