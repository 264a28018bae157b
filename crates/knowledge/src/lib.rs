//! Disease knowledge and lexical matching
//!
//! - [`KnowledgeStore`]: immutable disease records (keywords, symptom and
//!   prevention texts, base confidence), built once at start-up
//! - [`LexicalMatcher`]: TF-IDF cosine matcher over the keyword corpus

mod builtin;
pub mod matcher;
pub mod record;
pub mod stopwords;
pub mod store;
pub mod tfidf;

pub use matcher::{KeywordDocument, LexicalMatcher, MatchError, FAILURE_CONFIDENCE};
pub use record::{DiseaseRecord, KnowledgeFile};
pub use store::KnowledgeStore;
pub use tfidf::{SparseVector, TfidfModel};

use thiserror::Error;

/// Knowledge store errors
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Duplicate disease record: {0}")]
    DuplicateDisease(String),

    #[error("Disease {0} has no English keywords")]
    MissingKeywords(String),

    #[error("Disease {0} has no English symptom text")]
    MissingSymptomText(String),

    #[error("Disease {id} has invalid base confidence {value}")]
    InvalidConfidence { id: String, value: f32 },

    #[error("Knowledge store is empty")]
    Empty,

    #[error("Failed to read knowledge file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse knowledge file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl From<KnowledgeError> for health_agent_core::Error {
    fn from(err: KnowledgeError) -> Self {
        health_agent_core::Error::Config(err.to_string())
    }
}
