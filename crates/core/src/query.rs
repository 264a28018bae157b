//! Per-request query types

use crate::{DiseaseId, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dialog parameter carrying the disease slot
pub const PARAM_DISEASE: &str = "disease";
/// Dialog parameter carrying the location slot
pub const PARAM_LOCATION: &str = "location";

/// Everything known about one inbound query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryContext {
    /// Text as received from the channel
    pub raw_text: String,
    /// Filled in by the language detector
    pub detected_language: Language,
    /// Intent name supplied by the dialog manager, if any
    pub explicit_intent: Option<String>,
    /// Dialog parameters (`disease`, `location`)
    pub parameters: HashMap<String, String>,
    /// Opaque key used for analytics
    pub session_key: String,
}

impl QueryContext {
    pub fn new(raw_text: impl Into<String>, session_key: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            session_key: session_key.into(),
            ..Default::default()
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        let intent = intent.into();
        self.explicit_intent = if intent.trim().is_empty() {
            None
        } else {
            Some(intent)
        };
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Non-empty parameter value
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Disease parameter, if present and recognised
    pub fn disease(&self) -> Option<DiseaseId> {
        self.parameter(PARAM_DISEASE).and_then(DiseaseId::from_str_loose)
    }

    pub fn location(&self) -> Option<&str> {
        self.parameter(PARAM_LOCATION)
    }
}

/// Outcome of lexical matching
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: Option<DiseaseId>,
    pub confidence: f32,
}

impl MatchResult {
    pub fn new(disease: Option<DiseaseId>, confidence: f32) -> Self {
        Self {
            disease,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// No disease, with the given confidence
    pub fn none(confidence: f32) -> Self {
        Self::new(None, confidence)
    }

    /// Disease if the confidence is strictly above `threshold`
    pub fn accepted(&self, threshold: f32) -> Option<DiseaseId> {
        if self.confidence > threshold {
            self.disease
        } else {
            None
        }
    }
}
