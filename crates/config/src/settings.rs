//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{analytics, classifier, endpoints, messaging, monitor, timeouts};
use crate::ConfigError;

/// Environment variable prefix (`HEALTH_AGENT__SERVER__PORT=9000`)
pub const ENV_PREFIX: &str = "HEALTH_AGENT";

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    #[serde(default)]
    pub server: ServerConfig,

    /// Lexical matching thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// WhatsApp / SMS delivery
    #[serde(default)]
    pub messaging: MessagingConfig,

    #[serde(default)]
    pub translation: TranslationConfig,

    /// Disease statistics API
    #[serde(default)]
    pub stats: StatsConfig,

    /// Outbreak monitor
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Interaction log retention
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_classifier()?;
        self.validate_messaging()?;
        self.validate_monitor()?;
        self.validate_analytics()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "Port cannot be 0"));
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "server.timeout_seconds",
                "Timeout must be at least 1 second",
            ));
        }

        if self.environment.is_strict()
            && self.server.cors_enabled
            && self.server.cors_origins.iter().any(|o| o == "*")
        {
            return Err(ConfigError::invalid(
                "server.cors_origins",
                "Wildcard origin is not allowed outside development",
            ));
        }

        Ok(())
    }

    fn validate_classifier(&self) -> Result<(), ConfigError> {
        let c = &self.classifier;

        if !(0.0..1.0).contains(&c.match_threshold) {
            return Err(ConfigError::invalid(
                "classifier.match_threshold",
                format!("Must be in [0.0, 1.0), got {}", c.match_threshold),
            ));
        }

        if !(0.0..=1.0).contains(&c.default_confidence) {
            return Err(ConfigError::invalid(
                "classifier.default_confidence",
                format!("Must be between 0.0 and 1.0, got {}", c.default_confidence),
            ));
        }

        Ok(())
    }

    fn validate_messaging(&self) -> Result<(), ConfigError> {
        let m = &self.messaging;

        // Room for the continuation notice
        if m.sms_max_length < 100 {
            return Err(ConfigError::invalid(
                "messaging.sms_max_length",
                format!("Too short (minimum 100), got {}", m.sms_max_length),
            ));
        }

        if m.enabled && (m.account_sid.is_none() || m.auth_token.is_none()) {
            return Err(ConfigError::MissingField(
                "messaging.account_sid / messaging.auth_token".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_monitor(&self) -> Result<(), ConfigError> {
        let m = &self.monitor;

        if m.enabled && m.interval_seconds == 0 {
            return Err(ConfigError::invalid(
                "monitor.interval_seconds",
                "Interval must be at least 1 second",
            ));
        }

        if m.enabled && m.retry_seconds == 0 {
            return Err(ConfigError::invalid(
                "monitor.retry_seconds",
                "Retry delay must be at least 1 second",
            ));
        }

        Ok(())
    }

    fn validate_analytics(&self) -> Result<(), ConfigError> {
        if self.analytics.max_records == 0 {
            return Err(ConfigError::invalid(
                "analytics.max_records",
                "Must keep at least one record",
            ));
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins (empty = permissive in development only)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_timeout() -> u64 {
    timeouts::HTTP_REQUEST_SECS
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

/// Lexical matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Similarity must be strictly above this to accept a match
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f32,

    /// Confidence of default/help replies
    #[serde(default = "default_default_confidence")]
    pub default_confidence: f32,
}

fn default_match_threshold() -> f32 {
    classifier::MATCH_THRESHOLD
}
fn default_default_confidence() -> f32 {
    classifier::DEFAULT_CONFIDENCE
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            default_confidence: default_default_confidence(),
        }
    }
}

/// Messaging (Twilio) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    /// Deliver through Twilio; when false replies are only logged
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub account_sid: Option<String>,

    #[serde(default)]
    pub auth_token: Option<String>,

    /// WhatsApp sender, including the `whatsapp:` scheme
    #[serde(default = "default_whatsapp_from")]
    pub whatsapp_from: String,

    /// SMS sender; derived from `whatsapp_from` when unset
    #[serde(default)]
    pub sms_from: Option<String>,

    #[serde(default = "default_twilio_api_base")]
    pub api_base: String,

    #[serde(default = "default_messaging_timeout")]
    pub timeout_seconds: u64,

    /// Maximum SMS reply length in characters
    #[serde(default = "default_sms_max_length")]
    pub sms_max_length: usize,
}

fn default_whatsapp_from() -> String {
    messaging::WHATSAPP_SANDBOX_FROM.to_string()
}
fn default_twilio_api_base() -> String {
    messaging::TWILIO_API_BASE.to_string()
}
fn default_messaging_timeout() -> u64 {
    timeouts::MESSAGING_REQUEST_SECS
}
fn default_sms_max_length() -> usize {
    messaging::SMS_MAX_LENGTH
}

impl MessagingConfig {
    /// Sender for SMS replies
    pub fn sms_sender(&self) -> String {
        self.sms_from
            .clone()
            .unwrap_or_else(|| self.whatsapp_from.replace("whatsapp:", ""))
    }
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            account_sid: None,
            auth_token: None,
            whatsapp_from: default_whatsapp_from(),
            sms_from: None,
            api_base: default_twilio_api_base(),
            timeout_seconds: default_messaging_timeout(),
            sms_max_length: default_sms_max_length(),
        }
    }
}

/// Translation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    /// JSON POST to `endpoint`
    Http,
    /// Pass-through
    #[default]
    Disabled,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default)]
    pub provider: TranslationProvider,

    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_translation_timeout")]
    pub timeout_seconds: u64,
}

fn default_translation_endpoint() -> String {
    endpoints::TRANSLATION_DEFAULT.to_string()
}
fn default_translation_timeout() -> u64 {
    timeouts::TRANSLATION_REQUEST_SECS
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            endpoint: default_translation_endpoint(),
            api_key: None,
            timeout_seconds: default_translation_timeout(),
        }
    }
}

/// Disease statistics API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_stats_base_url")]
    pub base_url: String,

    #[serde(default = "default_stats_timeout")]
    pub timeout_seconds: u64,

    /// Region used when a query carries no location
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_stats_base_url() -> String {
    endpoints::DISEASE_STATS_DEFAULT.to_string()
}
fn default_stats_timeout() -> u64 {
    timeouts::STATS_REQUEST_SECS
}
fn default_region() -> String {
    monitor::DEFAULT_REGION.to_string()
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            base_url: default_stats_base_url(),
            timeout_seconds: default_stats_timeout(),
            default_region: default_region(),
        }
    }
}

/// Outbreak monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_monitor_interval")]
    pub interval_seconds: u64,

    #[serde(default = "default_monitor_retry")]
    pub retry_seconds: u64,

    /// Daily new cases above which an alert is raised
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u64,

    #[serde(default = "default_region")]
    pub region: String,
}

fn default_monitor_interval() -> u64 {
    monitor::INTERVAL_SECS
}
fn default_monitor_retry() -> u64 {
    monitor::RETRY_SECS
}
fn default_alert_threshold() -> u64 {
    monitor::ALERT_THRESHOLD
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_seconds: default_monitor_interval(),
            retry_seconds: default_monitor_retry(),
            alert_threshold: default_alert_threshold(),
            region: default_region(),
        }
    }
}

/// Analytics store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Oldest interactions are dropped beyond this count
    #[serde(default = "default_max_records")]
    pub max_records: usize,
}

fn default_max_records() -> usize {
    analytics::MAX_RECORDS
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_records: default_max_records(),
        }
    }
}

/// Knowledge store source
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeConfig {
    /// YAML file replacing the built-in disease table
    #[serde(default)]
    pub path: Option<String>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,

    /// Install the Prometheus recorder and serve `/metrics`
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (`HEALTH_AGENT__` prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings with `dir` as the configuration directory
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::from(dir.join("default")).required(false));

    if let Some(env_name) = env {
        builder = builder.add_source(File::from(dir.join(env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        port = settings.server.port,
        "Settings loaded"
    );

    Ok(settings)
}
