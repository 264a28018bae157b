//! Health agent pipeline
//!
//! Features:
//! - Intent routing (dialog-manager intent names, then trigger words)
//! - Response assembly from the knowledge store, the lexical matcher and
//!   the statistics provider
//! - Best-effort translation and SMS shaping
//! - Background outbreak monitor

pub mod agent;
pub mod assembler;
pub mod monitor;
pub mod router;
pub mod templates;

pub use agent::{AgentConfig, Collaborators, HealthAgent};
pub use assembler::{AssemblerConfig, ResponseAssembler};
pub use monitor::OutbreakMonitor;
pub use router::{Branch, IntentRouter};

use std::path::Path;
use std::sync::Arc;

use health_agent_knowledge::{KnowledgeError, KnowledgeStore, LexicalMatcher, MatchError};
use thiserror::Error;

/// Agent start-up errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Matcher error: {0}")]
    Matcher(#[from] MatchError),
}

impl From<AgentError> for health_agent_core::Error {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Knowledge(e) => e.into(),
            AgentError::Matcher(e) => e.into(),
        }
    }
}

/// Build the store and matcher once for the process
pub fn load_knowledge(
    path: Option<&Path>,
) -> Result<(Arc<KnowledgeStore>, Arc<LexicalMatcher>), AgentError> {
    let store = KnowledgeStore::load(path)?;
    let matcher = LexicalMatcher::new(&store)?;

    tracing::info!(
        diseases = store.len(),
        keywords = matcher.documents().len(),
        "Knowledge store loaded"
    );

    Ok((Arc::new(store), Arc::new(matcher)))
}
