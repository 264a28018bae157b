//! Intent routing
//!
//! Picks the handling branch for a query. The dialog manager's intent name
//! wins when it is one we know; otherwise a few trigger words are checked in
//! priority order, and everything else goes to the lexical matcher.

use health_agent_core::QueryContext;

/// Dialog-manager intent names
pub mod intents {
    pub const SYMPTOMS: &str = "symptoms.query";
    pub const PREVENTION: &str = "prevention.query";
    pub const VACCINATION: &str = "vaccination.query";
    pub const EMERGENCY: &str = "emergency.query";
    pub const HEALTH_DATA: &str = "health.data.query";
}

/// Handling branch for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Symptoms,
    Prevention,
    Vaccination,
    Emergency,
    HealthData,
    /// No intent recognised; answered by the lexical matcher
    Unclassified,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Symptoms => "symptoms",
            Branch::Prevention => "prevention",
            Branch::Vaccination => "vaccination",
            Branch::Emergency => "emergency",
            Branch::HealthData => "health_data",
            Branch::Unclassified => "unclassified",
        }
    }

    /// Branch for a dialog-manager intent name
    pub fn from_intent(intent: &str) -> Option<Self> {
        match intent.trim().to_lowercase().as_str() {
            intents::SYMPTOMS => Some(Branch::Symptoms),
            intents::PREVENTION => Some(Branch::Prevention),
            intents::VACCINATION => Some(Branch::Vaccination),
            intents::EMERGENCY => Some(Branch::Emergency),
            intents::HEALTH_DATA => Some(Branch::HealthData),
            _ => None,
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const SYMPTOM_TRIGGERS: &[&str] = &["symptom", "लक्षण", "disease", "बीमारी"];
const PREVENTION_TRIGGERS: &[&str] = &["prevent", "बचाव", "रोकथाम"];
const VACCINATION_TRIGGERS: &[&str] = &["vaccin", "टीका", "immuniz"];

/// Keyword and intent-name router
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<(Branch, Vec<String>)>,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRouter {
    pub fn new() -> Self {
        let rule = |branch, words: &[&str]| {
            (branch, words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
        };

        Self {
            rules: vec![
                rule(Branch::Symptoms, SYMPTOM_TRIGGERS),
                rule(Branch::Prevention, PREVENTION_TRIGGERS),
                rule(Branch::Vaccination, VACCINATION_TRIGGERS),
            ],
        }
    }

    /// First matching rule wins
    pub fn route(&self, ctx: &QueryContext) -> Branch {
        if let Some(branch) = ctx.explicit_intent.as_deref().and_then(Branch::from_intent) {
            return branch;
        }

        let text = ctx.raw_text.to_lowercase();
        self.rules
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| text.contains(t.as_str())))
            .map(|(branch, _)| *branch)
            .unwrap_or(Branch::Unclassified)
    }
}
