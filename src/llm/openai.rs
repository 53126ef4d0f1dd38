use super::backend::{CompletionStream, ModelBackend};
use super::messages::{ChatMessage, Role};
use crate::config::Settings;
use anyhow::{Context, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
        CreateTranscriptionRequestArgs,
    },
    Client as OpenAIClient,
};
use futures::StreamExt;
use std::path::Path;
use tracing::{debug, error};

/// Production model backend for an OpenAI-compatible hosted API.
///
/// Stateless network client: constructed once at startup and shared across
/// requests, no teardown needed.
pub struct OpenAiBackend {
    client: OpenAIClient<OpenAIConfig>,
    chat_model: String,
    whisper_model: String,
}

impl OpenAiBackend {
    pub fn new(settings: &Settings) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(&settings.openai_base_url)
            .with_api_key(&settings.openai_api_key);

        Self {
            client: OpenAIClient::with_config(config),
            chat_model: settings.chat_completion_model.clone(),
            whisper_model: settings.whisper_model.clone(),
        }
    }

    fn build_request(&self, messages: Vec<ChatMessage>, stream: bool) -> CreateChatCompletionRequest {
        let messages = messages.into_iter().map(to_request_message).collect();

        CreateChatCompletionRequest {
            model: self.chat_model.clone(),
            messages,
            stream: Some(stream),
            ..Default::default()
        }
    }
}

fn to_request_message(message: ChatMessage) -> ChatCompletionRequestMessage {
    match message.role {
        Role::System => ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: message.content.into(),
            name: None,
        }),
        Role::User => ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
            content: message.content.into(),
            name: None,
        }),
        #[allow(deprecated)]
        Role::Assistant => ChatCompletionRequestMessage::Assistant(
            async_openai::types::ChatCompletionRequestAssistantMessage {
                content: Some(message.content.into()),
                name: None,
                tool_calls: None,
                refusal: None,
                audio: None,
                function_call: None,
            },
        ),
    }
}

#[async_trait::async_trait]
impl ModelBackend for OpenAiBackend {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        debug!("Requesting chat completion ({} messages)", messages.len());

        let request = self.build_request(messages, false);
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .context("Chat completion request failed")?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    async fn complete_stream(&self, messages: Vec<ChatMessage>) -> Result<CompletionStream> {
        debug!(
            "Requesting streaming chat completion ({} messages)",
            messages.len()
        );

        let request = self.build_request(messages, true);
        let stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .context("Failed to open chat completion stream")?;

        // One fragment per chunk that actually carries delta content
        let fragments = stream.filter_map(|result| async move {
            match result {
                Ok(response) => response
                    .choices
                    .into_iter()
                    .find_map(|choice| choice.delta.content)
                    .map(Ok),
                Err(e) => {
                    error!("Error in chat completion stream: {}", e);
                    Some(Err(anyhow::Error::new(e)))
                }
            }
        });

        Ok(Box::pin(fragments))
    }

    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        debug!("Requesting transcription for {}", audio_path.display());

        let request = CreateTranscriptionRequestArgs::default()
            .file(audio_path)
            .model(self.whisper_model.clone())
            .language("en")
            .build()
            .context("Failed to build transcription request")?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .context("Transcription request failed")?;

        Ok(response.text)
    }
}
