//! Provider configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default chat-completions base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Configuration for the chat-completions provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key, sent as a bearer token.
    pub api_key: String,
    /// Model name (e.g., "deepseek-chat").
    pub model: String,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
}

impl ProviderConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `LARDER_API_KEY`: API key for the generation endpoint
    ///
    /// Optional:
    /// - `LARDER_MODEL`: Model name (default: "deepseek-chat")
    /// - `LARDER_BASE_URL`: API base URL (default: "https://api.deepseek.com")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("LARDER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("LARDER_API_KEY".to_string()))?;

        let model = env::var("LARDER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("LARDER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
