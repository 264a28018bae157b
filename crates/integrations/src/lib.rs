//! External collaborators
//!
//! Implementations of the collaborator traits from `health-agent-core`:
//! - [`TwilioTransport`] / [`LoggingTransport`]: outbound WhatsApp and SMS
//! - [`DiseaseShClient`]: public disease statistics
//! - [`InMemoryAnalyticsStore`] / [`InMemoryAlertLog`]: process-local
//!   interaction log and outbreak alerts

pub mod alerts;
pub mod analytics;
pub mod messaging;
pub mod stats;

pub use alerts::InMemoryAlertLog;
pub use analytics::InMemoryAnalyticsStore;
pub use messaging::{create_transport, LoggingTransport, TwilioConfig, TwilioTransport};
pub use stats::DiseaseShClient;

use thiserror::Error;

/// Integration errors
#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for IntegrationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            IntegrationError::Timeout
        } else if err.is_decode() {
            IntegrationError::InvalidResponse(err.to_string())
        } else {
            IntegrationError::ConnectionFailed(err.to_string())
        }
    }
}

impl IntegrationError {
    /// Map an unsuccessful HTTP status
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 | 403 => IntegrationError::AuthFailed(format!("{context}: {status}")),
            404 => IntegrationError::NotFound(context.to_string()),
            429 => IntegrationError::RateLimited,
            400..=499 => IntegrationError::InvalidRequest(format!("{context}: {status}")),
            _ => IntegrationError::ConnectionFailed(format!("{context}: {status}")),
        }
    }
}
