//! Core traits and types for the health agent
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English and Hindi) and script ranges
//! - Disease identifiers shared by the knowledge store and the router
//! - Per-request types (query context, match result, response envelope)
//! - Collaborator traits (translation, statistics, messaging, analytics)
//! - Error types

pub mod disease;
pub mod error;
pub mod language;
pub mod query;
pub mod response;
pub mod traits;

pub use disease::DiseaseId;
pub use error::{Error, Result};
pub use language::{Language, Script};
pub use query::{MatchResult, QueryContext};
pub use response::{Channel, ResponseEnvelope, ResponseSource};

// Trait re-exports
pub use traits::{
    AccuracySummary, AlertLog, AlertSeverity, AnalyticsSink, DiseaseStats, HealthAlert,
    InteractionRecord, InteractionSummary, MessageTransport, QueryFrequency, StatsProvider,
    Translator,
};
