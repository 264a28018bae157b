//! Analytics and alert bookkeeping traits

use crate::{Channel, Language, ResponseSource, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored length of a response text, in characters
pub const MAX_STORED_RESPONSE_CHARS: usize = 500;

/// One logged interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub session_key: String,
    pub query: String,
    pub response: String,
    pub confidence: f32,
    pub language: Language,
    pub source: ResponseSource,
    pub channel: Channel,
    pub timestamp: DateTime<Utc>,
    /// User rating (1..=5), attached later through feedback
    pub feedback: Option<u8>,
}

impl InteractionRecord {
    /// Build a record stamped now, response cut to the stored maximum
    pub fn new(
        session_key: impl Into<String>,
        query: impl Into<String>,
        response: &str,
        confidence: f32,
        language: Language,
        source: ResponseSource,
        channel: Channel,
    ) -> Self {
        Self {
            session_key: session_key.into(),
            query: query.into(),
            response: response.chars().take(MAX_STORED_RESPONSE_CHARS).collect(),
            confidence,
            language,
            source,
            channel,
            timestamp: Utc::now(),
            feedback: None,
        }
    }
}

/// Aggregated interaction statistics for one (language, source) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub language: Language,
    pub source: ResponseSource,
    pub total_interactions: usize,
    pub avg_confidence: f32,
    pub unique_users: usize,
}

/// How often a query text was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFrequency {
    pub query: String,
    pub frequency: usize,
}

/// Confidence distribution for one (source, language) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub source: ResponseSource,
    pub language: Language,
    pub avg_confidence: f32,
    /// Share of interactions with confidence above 0.8, in percent
    pub high_confidence_percentage: f32,
    /// Share of interactions with confidence above 0.6, in percent
    pub medium_confidence_percentage: f32,
}

/// Interaction log
///
/// Recording is fire-and-forget for the pipeline: callers log errors and
/// continue.
#[async_trait]
pub trait AnalyticsSink: Send + Sync + 'static {
    /// Append an interaction
    async fn record(&self, record: InteractionRecord) -> Result<()>;

    /// Attach a rating to the newest interaction of `session_key`
    ///
    /// Returns `false` if the session has no interactions.
    async fn record_feedback(&self, session_key: &str, rating: u8) -> Result<bool>;

    /// Total number of stored interactions
    async fn interaction_count(&self) -> Result<usize>;

    /// Per-(language, source) statistics for interactions newer than `since`
    async fn interaction_summary(&self, since: DateTime<Utc>) -> Result<Vec<InteractionSummary>>;

    /// Most frequent query texts newer than `since`
    async fn top_queries(&self, since: DateTime<Utc>, limit: usize) -> Result<Vec<QueryFrequency>>;

    /// Per-(source, language) confidence distribution newer than `since`
    async fn accuracy_summary(&self, since: DateTime<Utc>) -> Result<Vec<AccuracySummary>>;
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

/// Outbreak alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    pub alert_type: String,
    pub message: String,
    pub severity: AlertSeverity,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthAlert {
    pub fn outbreak(message: impl Into<String>, severity: AlertSeverity, location: &str) -> Self {
        Self {
            alert_type: "disease_outbreak".to_string(),
            message: message.into(),
            severity,
            location: location.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Alert log
#[async_trait]
pub trait AlertLog: Send + Sync + 'static {
    async fn append(&self, alert: HealthAlert) -> Result<()>;

    /// Newest alerts first
    async fn recent(&self, limit: usize) -> Result<Vec<HealthAlert>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_truncates_response_by_chars() {
        let long = "स".repeat(800);
        let record = InteractionRecord::new(
            "s1",
            "q",
            &long,
            0.9,
            Language::Hindi,
            ResponseSource::KnowledgeBase,
            Channel::Webhook,
        );
        assert_eq!(record.response.chars().count(), MAX_STORED_RESPONSE_CHARS);
        assert!(record.feedback.is_none());
    }
}
