use crate::llm::{ChatMessage, ModelBackend};
use axum::response::sse::Event;
use futures::StreamExt;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Thread identifier used when the client does not supply one
pub const DEFAULT_THREAD_ID: &str = "1";

/// Conversational agent that relays streaming hosted-model replies.
///
/// Conversation history lives entirely in the hosted chat service, addressed
/// by the thread identifier; the only message sent from here is the user's
/// new one.
pub struct ChatbotAgent {
    model: Arc<dyn ModelBackend>,
}

impl ChatbotAgent {
    pub fn new(model: Arc<dyn ModelBackend>) -> Self {
        Self { model }
    }

    /// Stream the model's reply into `tx`, one SSE data event per fragment,
    /// in generation order, each flushed before the next is requested.
    ///
    /// An upstream error at any point becomes one final data event carrying
    /// the error text: by the time the stream can fail, the response has
    /// already committed to a 200, so the client must inspect content to
    /// detect a mid-stream failure.
    pub async fn stream_chat(
        &self,
        message: String,
        thread_id: &str,
        tx: mpsc::Sender<Result<Event, Infallible>>,
    ) {
        info!("Starting chat stream for thread {}", thread_id);

        let messages = vec![ChatMessage::user(message)];

        let mut stream = match self.model.complete_stream(messages).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("Failed to open chat completion stream: {}", e);
                let _ = tx.send(Ok(Event::default().data(e.to_string()))).await;
                return;
            }
        };

        while let Some(fragment) = stream.next().await {
            match fragment {
                Ok(text) => {
                    if tx.send(Ok(Event::default().data(text))).await.is_err() {
                        info!("Chat client disconnected, dropping stream");
                        return;
                    }
                }
                Err(e) => {
                    error!("Chat completion stream failed mid-generation: {}", e);
                    let _ = tx.send(Ok(Event::default().data(e.to_string()))).await;
                    return;
                }
            }
        }

        info!("Chat stream for thread {} complete", thread_id);
    }
}
