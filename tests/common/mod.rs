// Shared scripted stand-in for the hosted-model access layer.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use futures::stream;
use meeting_agent::{ChatMessage, CompletionStream, ModelBackend};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Test double for `ModelBackend`. Every call is counted, the transcribe
/// path and the last completion request are recorded, and each capability
/// can be scripted to fail.
pub struct MockModel {
    /// Transcription result; `None` makes `transcribe` fail
    pub transcript: Option<String>,
    /// Full-completion result; `None` makes `complete` fail
    pub completion: Option<String>,
    /// Streamed fragments; an `Err` message becomes a stream error item
    pub fragments: Vec<Result<String, String>>,
    /// Fail `complete_stream` before any fragment is produced
    pub fail_stream_open: bool,

    pub transcribe_calls: AtomicUsize,
    pub complete_calls: AtomicUsize,
    pub seen_audio_path: Mutex<Option<PathBuf>>,
    pub last_completion_request: Mutex<Option<Vec<ChatMessage>>>,
}

impl MockModel {
    pub fn happy() -> Self {
        Self {
            transcript: Some("We agreed to ship the beta on Friday.".to_string()),
            completion: Some(
                "## Meeting Overview\nBeta release planning.\n\n## Key Points\n- Ship Friday"
                    .to_string(),
            ),
            fragments: vec![Ok("Hello".to_string()), Ok(" there".to_string())],
            fail_stream_open: false,
            transcribe_calls: AtomicUsize::new(0),
            complete_calls: AtomicUsize::new(0),
            seen_audio_path: Mutex::new(None),
            last_completion_request: Mutex::new(None),
        }
    }

    pub fn failing_transcription() -> Self {
        Self {
            transcript: None,
            ..Self::happy()
        }
    }

    pub fn failing_completion() -> Self {
        Self {
            completion: None,
            ..Self::happy()
        }
    }

    pub fn with_fragments(fragments: Vec<Result<String, String>>) -> Self {
        Self {
            fragments,
            ..Self::happy()
        }
    }
}

#[async_trait::async_trait]
impl ModelBackend for MockModel {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.complete_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_completion_request.lock().unwrap() = Some(messages);

        self.completion
            .clone()
            .ok_or_else(|| anyhow!("model service unavailable"))
    }

    async fn complete_stream(&self, messages: Vec<ChatMessage>) -> Result<CompletionStream> {
        if self.fail_stream_open {
            return Err(anyhow!("failed to reach model service"));
        }

        *self.last_completion_request.lock().unwrap() = Some(messages);

        let items: Vec<Result<String>> = self
            .fragments
            .iter()
            .cloned()
            .map(|fragment| fragment.map_err(|msg| anyhow!(msg)))
            .collect();

        Ok(Box::pin(stream::iter(items)))
    }

    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        self.transcribe_calls.fetch_add(1, Ordering::SeqCst);
        *self.seen_audio_path.lock().unwrap() = Some(audio_path.to_path_buf());

        self.transcript
            .clone()
            .ok_or_else(|| anyhow!("transcription service unavailable"))
    }
}
