use super::state::AppState;
use crate::agent::{ChatbotAgent, MinuteWriter, DEFAULT_THREAD_ID};
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::sse::{Event, Sse},
    response::{IntoResponse, Json},
};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::convert::Infallible;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tracing::{error, info};

const SUPPORTED_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];
const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file format. Please upload MP3, WAV, or M4A files.";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    /// The user's message text
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatParams {
    /// Identifier for the chat thread (default "1")
    pub thread_id: Option<String>,
}

/// Response envelope for agent operations
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// SSE event stream backed by an mpsc channel; the producing task ends the
/// stream by dropping the sender
pub struct SseStream {
    pub receiver: mpsc::Receiver<Result<Event, Infallible>>,
}

impl Stream for SseStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Welcome payload
pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the FastAPI LangGraph Agent!" }))
}

/// POST /chat
/// Stream the chatbot's reply as server-sent events, one data event per
/// generated fragment
pub async fn chat(
    State(state): State<AppState>,
    Query(params): Query<ChatParams>,
    Json(query): Json<ChatQuery>,
) -> Sse<SseStream> {
    let thread_id = params
        .thread_id
        .unwrap_or_else(|| DEFAULT_THREAD_ID.to_string());

    info!("Chat request for thread {}", thread_id);

    let agent = ChatbotAgent::new(state.model.clone());

    // Capacity 1: each fragment is handed off before the next is requested
    let (tx, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        agent.stream_chat(query.message, &thread_id, tx).await;
    });

    Sse::new(SseStream { receiver: rx })
}

/// POST /minute-writer/process
/// Process an uploaded audio recording into meeting minutes
pub async fn process_meeting(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    // Pull the uploaded file out of the form
    let (filename, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(filename) = field.file_name().map(str::to_owned) else {
                    continue;
                };

                // Reject unsupported formats before reading any content
                if !has_supported_extension(&filename) {
                    return error_response(StatusCode::BAD_REQUEST, UNSUPPORTED_FORMAT_MESSAGE);
                }

                match field.bytes().await {
                    Ok(data) => break (filename, data),
                    Err(e) => {
                        error!("Failed to read upload body: {}", e);
                        return error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("An error occurred: {e}"),
                        );
                    }
                }
            }
            Ok(None) => {
                return error_response(StatusCode::BAD_REQUEST, "Missing audio file upload");
            }
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid upload: {e}"));
            }
        }
    };

    info!("Processing upload {} ({} bytes)", filename, data.len());

    // Spill the upload to a scoped temporary file; ownership guarantees the
    // file is removed on every exit path
    let suffix = extension_suffix(&filename);
    let temp_file = match tempfile::Builder::new().suffix(&suffix).tempfile() {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create temporary file: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {e}"),
            );
        }
    };

    if let Err(e) = tokio::fs::write(temp_file.path(), &data).await {
        error!("Failed to write temporary file: {}", e);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred: {e}"),
        );
    }

    let writer = MinuteWriter::new(state.model.clone());

    match writer.process_recording(temp_file.path()).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(AgentResponse {
                success: true,
                message: "Meeting minutes generated successfully".to_string(),
                data: Some(json!({ "summary": summary })),
            }),
        )
            .into_response(),
        Err(e) if e.is_client_error() => {
            error!("Minute-writer pipeline rejected request: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!("Minute-writer pipeline failed: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred: {e}"),
            )
        }
    }
}

fn has_supported_extension(filename: &str) -> bool {
    let lowered = filename.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(&format!(".{ext}")))
}

/// Suffix for the temporary file, preserving the upload's extension so the
/// transcription API sees the original container format
fn extension_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}
