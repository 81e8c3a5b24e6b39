//! LLM provider abstraction for recipe generation.
//!
//! A trait-based seam over the hosted text-completion endpoint, with a fake
//! implementation for tests. Exactly one real provider exists: an
//! OpenAI-compatible chat-completions client with JSON mode.

mod chat;
mod config;
mod fake;

pub use chat::ChatProvider;
pub use config::{ConfigError, ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse provider response envelope: {0}")]
    Envelope(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider sends
/// one system/user instruction pair and returns the model's raw text; it
/// makes a single attempt per call, with no retry or backoff.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send an instruction pair to the model and get its text response.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "chat", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "deepseek-chat").
    fn model_name(&self) -> &str;
}

/// Create the real provider from environment configuration.
///
/// See [`ProviderConfig::from_env`] for the variables involved.
pub fn provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let config = ProviderConfig::from_env()
        .map_err(|e| LlmError::NotConfigured(e.to_string()))?;
    Ok(Box::new(ChatProvider::new(config)))
}
