use anyhow::Result;
use meeting_agent::{create_router, AppState, ModelBackend, OpenAiBackend, Settings};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::load()?;

    info!("Meeting Agent v0.1.0");
    info!("Chat completion model: {}", settings.chat_completion_model);
    info!("Transcription model: {}", settings.whisper_model);

    let model: Arc<dyn ModelBackend> = Arc::new(OpenAiBackend::new(&settings));
    let app = create_router(AppState::new(model));

    let addr = format!("{}:{}", settings.http_bind, settings.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
