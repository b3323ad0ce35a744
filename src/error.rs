// Error types for the easel application.
// Handles portfolio API errors, config errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EaselError {
    #[error("Portfolio API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Unauthorized: invalid admin key")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidDraft(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, EaselError>;
