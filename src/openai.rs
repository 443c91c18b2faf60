//! OpenAI client configuration with sensible defaults.

use crate::config::Settings;
use crate::error::{Result, TutorError};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Create an OpenAI client from settings.
///
/// An empty API key still yields a client; every completion call made with it
/// will be rejected by the API.
pub fn create_client(settings: &Settings) -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(
        &settings.api_key(),
        Duration::from_secs(settings.openai.timeout_seconds),
    )
}

/// Create an OpenAI client with an explicit key and timeout.
pub fn create_client_with_timeout(api_key: &str, timeout: Duration) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TutorError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new().with_api_key(api_key);
    Ok(Client::with_config(config).with_http_client(http_client))
}
