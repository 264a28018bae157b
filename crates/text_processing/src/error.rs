//! Text processing errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextProcessingError>;

#[derive(Error, Debug)]
pub enum TextProcessingError {
    #[error("Translation request failed: {0}")]
    Request(String),

    #[error("Translation endpoint returned status {0}")]
    Status(u16),

    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedPair { from: String, to: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TextProcessingError {
    fn from(err: reqwest::Error) -> Self {
        TextProcessingError::Request(err.to_string())
    }
}

impl From<TextProcessingError> for health_agent_core::Error {
    fn from(err: TextProcessingError) -> Self {
        match err {
            TextProcessingError::Config(msg) => health_agent_core::Error::Config(msg),
            other => health_agent_core::Error::Translation(other.to_string()),
        }
    }
}
