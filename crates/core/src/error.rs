//! Error types shared across crates

use thiserror::Error;

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core errors
///
/// Collaborator failures are reported through these variants so callers can
/// degrade to a fallback text instead of aborting a request.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Statistics lookup error: {0}")]
    Stats(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Analytics error: {0}")]
    Analytics(String),

    #[error("Match error: {0}")]
    Match(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl Error {
    /// Whether the error came from an outbound collaborator call
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::Translation(_) | Self::Stats(_) | Self::Transport(_) | Self::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_classification() {
        assert!(Error::Stats("503".into()).is_collaborator_failure());
        assert!(Error::Timeout(5000).is_collaborator_failure());
        assert!(!Error::InvalidInput("empty".into()).is_collaborator_failure());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::Timeout(5000).to_string(), "Timeout after 5000ms");
    }
}
