//! Error kinds for the minute-writer pipeline.
//!
//! The HTTP boundary maps these to status codes: transcription failures
//! (which include unreadable or missing audio files), an empty transcript,
//! and an incomplete output record are client errors; a failed summarization
//! call is an upstream model error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to transcribe audio: {0}")]
    Transcription(#[source] anyhow::Error),

    #[error("Missing or empty transcript in state")]
    EmptyTranscript,

    #[error("Failed to summarize transcript: {0}")]
    Summarization(#[source] anyhow::Error),

    #[error("Incomplete meeting record: missing {0}")]
    IncompleteOutput(&'static str),
}

impl AgentError {
    /// True for errors caused by the request itself (bad input, unmet
    /// precondition, malformed output record) rather than by the upstream
    /// model service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AgentError::Transcription(_)
                | AgentError::EmptyTranscript
                | AgentError::IncompleteOutput(_)
        )
    }
}
