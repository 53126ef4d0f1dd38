use super::messages::ChatMessage;
use anyhow::Result;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;

/// Text fragments produced by a streaming completion, in generation order.
/// The stream is finite and cannot be restarted.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Hosted-model access trait
///
/// Wraps the two hosted AI capabilities behind uniform entry points: chat
/// completion (streaming or full) and audio transcription. The production
/// implementation talks to an OpenAI-compatible API; tests substitute a
/// scripted backend.
///
/// Failure contract: transport and upstream errors propagate unchanged to
/// the caller. No retry, no backoff — a single failed call fails the whole
/// request.
#[async_trait::async_trait]
pub trait ModelBackend: Send + Sync {
    /// Send an ordered list of role-tagged messages and return the full
    /// generated text.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Send an ordered list of role-tagged messages and return a lazy
    /// fragment stream, yielding text as the model generates it.
    async fn complete_stream(&self, messages: Vec<ChatMessage>) -> Result<CompletionStream>;

    /// Transcribe one audio file to plain text. No streaming mode.
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
