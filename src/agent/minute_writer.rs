use crate::error::AgentError;
use crate::llm::{ChatMessage, ModelBackend};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates concise meeting summaries.";

/// Pipeline state for one meeting recording, populated stage by stage and
/// discarded when the request ends
#[derive(Debug, Clone)]
pub struct MeetingState {
    pub audio_path: PathBuf,
    pub transcript: Option<String>,
    pub summary: Option<String>,
}

impl MeetingState {
    pub fn new(audio_path: impl Into<PathBuf>) -> Self {
        Self {
            audio_path: audio_path.into(),
            transcript: None,
            summary: None,
        }
    }

    /// Enforce the output contract: audio path, transcript and summary must
    /// all be present and non-empty before the record leaves the pipeline.
    fn into_output(self) -> Result<MinuteWriterOutput, AgentError> {
        let transcript = self
            .transcript
            .filter(|t| !t.is_empty())
            .ok_or(AgentError::IncompleteOutput("transcript"))?;
        let summary = self
            .summary
            .filter(|s| !s.is_empty())
            .ok_or(AgentError::IncompleteOutput("summary"))?;

        Ok(MinuteWriterOutput {
            audio_path: self.audio_path.display().to_string(),
            transcript,
            summary,
        })
    }
}

/// The validated terminal record of a completed pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct MinuteWriterOutput {
    pub audio_path: String,
    pub transcript: String,
    pub summary: String,
}

/// Two-stage sequential pipeline: transcribe, then summarize.
///
/// No branching, no retries, no partial results — a run succeeds or fails
/// as a whole, and the summarize stage never executes without a transcript.
pub struct MinuteWriter {
    model: Arc<dyn ModelBackend>,
}

impl MinuteWriter {
    pub fn new(model: Arc<dyn ModelBackend>) -> Self {
        Self { model }
    }

    /// Transcribe stage: the audio file at `state.audio_path` becomes
    /// `state.transcript`. Any failure, including an unreadable or missing
    /// file, surfaces as a transcription error wrapping the cause.
    pub async fn transcribe(&self, mut state: MeetingState) -> Result<MeetingState, AgentError> {
        let transcript = self
            .model
            .transcribe(&state.audio_path)
            .await
            .map_err(AgentError::Transcription)?;

        state.transcript = Some(transcript);
        Ok(state)
    }

    /// Summarize stage: `state.transcript` becomes `state.summary`. Requires
    /// a non-empty transcript; no model call is made without one.
    pub async fn summarize(&self, mut state: MeetingState) -> Result<MeetingState, AgentError> {
        let transcript = state
            .transcript
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(AgentError::EmptyTranscript)?;

        let messages = vec![
            ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
            ChatMessage::user(summary_prompt(transcript)),
        ];

        let summary = self
            .model
            .complete(messages)
            .await
            .map_err(AgentError::Summarization)?;

        state.summary = Some(summary);
        Ok(state)
    }

    /// Run the full pipeline for one recording and return the summary only;
    /// the transcript stays inside pipeline state.
    pub async fn process_recording(&self, audio_path: &Path) -> Result<String, AgentError> {
        info!("Processing meeting recording: {}", audio_path.display());

        let state = MeetingState::new(audio_path);
        let state = self.transcribe(state).await?;
        let state = self.summarize(state).await?;
        let output = state.into_output()?;

        info!(
            "Meeting minutes generated ({} chars of summary)",
            output.summary.len()
        );

        Ok(output.summary)
    }
}

fn summary_prompt(transcript: &str) -> String {
    format!(
        "Please summarize this meeting transcript and format it in markdown:\n\n\
         {transcript}\n\n\
         Format the summary with these sections:\n\
         - Meeting Overview\n\
         - Key Points\n\
         - Action Items\n\
         - Next Steps"
    )
}
