//! Collaborator traits for the health agent
//!
//! Every outbound dependency of the pipeline sits behind one of these traits
//! so that implementations can be swapped by configuration and mocked in tests.
//!
//! ```text
//! Text:
//!   - Translator: English → Hindi translation of assembled replies
//!
//! Data:
//!   - StatsProvider: Government/public disease statistics
//!
//! Delivery:
//!   - MessageTransport: WhatsApp / SMS outbound messages
//!
//! Bookkeeping:
//!   - AnalyticsSink: Interaction log, feedback and summaries
//!   - AlertLog: Outbreak alerts raised by the monitor
//! ```

mod analytics;
mod messaging;
mod stats;
mod translation;

pub use analytics::{
    AccuracySummary, AlertLog, AlertSeverity, AnalyticsSink, HealthAlert, InteractionRecord,
    InteractionSummary, QueryFrequency,
};
pub use messaging::MessageTransport;
pub use stats::{DiseaseStats, StatsProvider};
pub use translation::Translator;
