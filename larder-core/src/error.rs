use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the recipe generation flow.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Pantry is empty; nothing to cook with")]
    EmptyPantry,

    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("Response was not valid JSON: {0}")]
    MalformedResponse(String),

    #[error("Response JSON is not a valid recipe: {0}")]
    InvalidShape(String),
}

/// Errors from persisting state to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
