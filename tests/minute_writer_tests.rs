// Integration tests for the minute-writer pipeline.
//
// The hosted model is replaced by a scripted backend so the tests can
// observe call ordering and failure classification.

mod common;

use anyhow::Result;
use common::MockModel;
use meeting_agent::{MeetingState, MinuteWriter, Role};
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn process_recording_returns_summary() -> Result<()> {
    let model = Arc::new(MockModel::happy());
    let writer = MinuteWriter::new(model.clone());

    let summary = writer.process_recording(Path::new("standup.wav")).await?;

    assert!(summary.contains("Meeting Overview"));
    assert_eq!(model.transcribe_calls.load(Ordering::SeqCst), 1);
    assert_eq!(model.complete_calls.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn summary_request_carries_transcript_and_format_instructions() -> Result<()> {
    let model = Arc::new(MockModel::happy());
    let writer = MinuteWriter::new(model.clone());

    writer.process_recording(Path::new("standup.wav")).await?;

    let messages = model
        .last_completion_request
        .lock()
        .unwrap()
        .clone()
        .expect("summarize stage should call the model");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].content.contains("concise meeting summaries"));
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1]
        .content
        .contains("We agreed to ship the beta on Friday."));
    assert!(messages[1].content.contains("Meeting Overview"));
    assert!(messages[1].content.contains("Action Items"));

    Ok(())
}

#[tokio::test]
async fn summarize_without_transcript_fails_before_model_call() {
    let model = Arc::new(MockModel::happy());
    let writer = MinuteWriter::new(model.clone());

    let err = writer
        .summarize(MeetingState::new("standup.wav"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Missing or empty transcript in state");
    assert!(err.is_client_error());
    assert_eq!(model.complete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn summarize_rejects_empty_transcript() {
    let model = Arc::new(MockModel::happy());
    let writer = MinuteWriter::new(model.clone());

    let mut state = MeetingState::new("standup.wav");
    state.transcript = Some(String::new());

    let err = writer.summarize(state).await.unwrap_err();

    assert_eq!(err.to_string(), "Missing or empty transcript in state");
    assert_eq!(model.complete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn transcription_failure_stops_the_pipeline() {
    let model = Arc::new(MockModel::failing_transcription());
    let writer = MinuteWriter::new(model.clone());

    let err = writer
        .process_recording(Path::new("standup.wav"))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Failed to transcribe audio"));
    assert!(err.is_client_error());
    // The summarize stage never runs without a transcript
    assert_eq!(model.complete_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn summarization_failure_is_an_upstream_error() {
    let model = Arc::new(MockModel::failing_completion());
    let writer = MinuteWriter::new(model);

    let err = writer
        .process_recording(Path::new("standup.wav"))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Failed to summarize transcript"));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn empty_summary_violates_output_contract() {
    let model = Arc::new(MockModel {
        completion: Some(String::new()),
        ..MockModel::happy()
    });
    let writer = MinuteWriter::new(model);

    let err = writer
        .process_recording(Path::new("standup.wav"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Incomplete meeting record: missing summary");
    assert!(err.is_client_error());
}
