//! Configuration management for the health agent
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, then `config/{env}`)
//! - Environment variables (`HEALTH_AGENT__` prefix, `__` separator)
//!
//! Every section has a complete default so the service starts without any
//! configuration file.

pub mod constants;
pub mod settings;

pub use settings::{
    load_settings, load_settings_from, AnalyticsConfig, ClassifierConfig, KnowledgeConfig,
    MessagingConfig, MonitorConfig, ObservabilityConfig, RuntimeEnvironment, ServerConfig,
    Settings, StatsConfig, TranslationConfig, TranslationProvider,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
