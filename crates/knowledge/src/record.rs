//! Disease record and file format

use health_agent_core::{DiseaseId, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the responder knows about one disease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub id: DiseaseId,

    /// Matcher keywords per language, in corpus order
    #[serde(default)]
    pub keywords: BTreeMap<Language, Vec<String>>,

    /// Precomposed symptom reply per language
    #[serde(default)]
    pub symptom_text: BTreeMap<Language, String>,

    /// Precomposed bilingual prevention reply
    #[serde(default)]
    pub prevention_text: Option<String>,

    /// Confidence reported for explicit lookups, in (0, 1]
    pub base_confidence: f32,
}

impl DiseaseRecord {
    pub fn new(id: DiseaseId, base_confidence: f32) -> Self {
        Self {
            id,
            keywords: BTreeMap::new(),
            symptom_text: BTreeMap::new(),
            prevention_text: None,
            base_confidence,
        }
    }

    pub fn with_keywords(mut self, language: Language, keywords: &[&str]) -> Self {
        self.keywords
            .insert(language, keywords.iter().map(|k| k.to_string()).collect());
        self
    }

    pub fn with_symptoms(mut self, language: Language, text: &str) -> Self {
        self.symptom_text.insert(language, text.to_string());
        self
    }

    pub fn with_prevention(mut self, text: &str) -> Self {
        self.prevention_text = Some(text.to_string());
        self
    }

    /// Keywords for `language`, empty if none
    pub fn keywords_for(&self, language: Language) -> &[String] {
        self.keywords
            .get(&language)
            .map(|k| k.as_slice())
            .unwrap_or(&[])
    }
}

/// YAML file replacing the built-in table
#[derive(Debug, Serialize, Deserialize)]
pub struct KnowledgeFile {
    #[serde(default)]
    pub version: Option<String>,
    pub diseases: Vec<DiseaseRecord>,
}
