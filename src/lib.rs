pub mod agent;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;

pub use agent::{ChatbotAgent, MeetingState, MinuteWriter, MinuteWriterOutput, DEFAULT_THREAD_ID};
pub use config::Settings;
pub use error::AgentError;
pub use http::{create_router, AppState};
pub use llm::{ChatMessage, CompletionStream, ModelBackend, OpenAiBackend, Role};
