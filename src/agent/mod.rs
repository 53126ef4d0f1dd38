//! Agent pipelines over the hosted-model access layer
//!
//! Two independent request flows:
//! - `ChatbotAgent`: relays a streaming chat completion as SSE events
//! - `MinuteWriter`: transcribes a meeting recording, then summarizes the
//!   transcript into structured markdown minutes

mod chatbot;
mod minute_writer;

pub use chatbot::{ChatbotAgent, DEFAULT_THREAD_ID};
pub use minute_writer::{MeetingState, MinuteWriter, MinuteWriterOutput};
