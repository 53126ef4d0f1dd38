use anyhow::Result;
use serde::Deserialize;

/// Service settings, sourced from the environment (with `.env` support at
/// process startup). `OPENAI_BASE_URL` and `OPENAI_API_KEY` are required;
/// everything else has a default.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub openai_base_url: String,
    pub openai_api_key: String,
    pub whisper_model: String,
    pub chat_completion_model: String,
    pub http_bind: String,
    pub http_port: u16,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("whisper_model", "gpt-4o-mini-transcribe")?
            .set_default("chat_completion_model", "gpt-4o-mini")?
            .set_default("http_bind", "0.0.0.0")?
            .set_default("http_port", 8000u16)?
            .add_source(config::Environment::default())
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
