//! Immutable disease knowledge store

use std::path::Path;

use health_agent_core::{DiseaseId, Language};

use crate::record::{DiseaseRecord, KnowledgeFile};
use crate::{builtin, KnowledgeError};

/// Read-only table of disease records
///
/// Records are kept in disease declaration order, which is also the corpus
/// order used by the lexical matcher.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    records: Vec<DiseaseRecord>,
}

impl KnowledgeStore {
    /// Build a store, validating every record
    pub fn new(mut records: Vec<DiseaseRecord>) -> Result<Self, KnowledgeError> {
        if records.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        records.sort_by_key(|r| r.id);

        for pair in records.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(KnowledgeError::DuplicateDisease(pair[0].id.to_string()));
            }
        }

        for record in &records {
            Self::validate_record(record)?;
        }

        Ok(Self { records })
    }

    fn validate_record(record: &DiseaseRecord) -> Result<(), KnowledgeError> {
        let id = record.id.to_string();

        let has_english_keyword = record
            .keywords_for(Language::English)
            .iter()
            .any(|k| !k.trim().is_empty());
        if !has_english_keyword {
            return Err(KnowledgeError::MissingKeywords(id));
        }

        let has_english_text = record
            .symptom_text
            .get(&Language::English)
            .is_some_and(|t| !t.trim().is_empty());
        if !has_english_text {
            return Err(KnowledgeError::MissingSymptomText(id));
        }

        if !(record.base_confidence > 0.0 && record.base_confidence <= 1.0) {
            return Err(KnowledgeError::InvalidConfidence {
                id,
                value: record.base_confidence,
            });
        }

        Ok(())
    }

    /// Store with the built-in disease table
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::new(builtin::records())
    }

    /// Parse a YAML knowledge file
    pub fn from_yaml_str(yaml: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = serde_yaml::from_str(yaml)?;
        Self::new(file.diseases)
    }

    /// Load a YAML knowledge file from disk
    pub fn from_yaml_file(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_yaml_str(&content)?;

        tracing::info!(
            file = %path.display(),
            diseases = store.records.len(),
            "Loaded knowledge file"
        );

        Ok(store)
    }

    /// Load from `path` if given, otherwise the built-in table
    pub fn load(path: Option<&Path>) -> Result<Self, KnowledgeError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Self::builtin(),
        }
    }

    pub fn record(&self, id: DiseaseId) -> Option<&DiseaseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Symptom text in exactly `language`
    pub fn lookup(&self, id: DiseaseId, language: Language) -> Option<&str> {
        self.record(id)?
            .symptom_text
            .get(&language)
            .map(|t| t.as_str())
    }

    /// Symptom text in `language`, falling back to English
    pub fn lookup_localized(&self, id: DiseaseId, language: Language) -> Option<&str> {
        self.lookup(id, language)
            .or_else(|| self.lookup(id, Language::English))
    }

    pub fn lookup_prevention(&self, id: DiseaseId) -> Option<&str> {
        self.record(id)?.prevention_text.as_deref()
    }

    pub fn base_confidence(&self, id: DiseaseId) -> Option<f32> {
        self.record(id).map(|r| r.base_confidence)
    }

    /// Diseases in store order
    pub fn diseases(&self) -> impl Iterator<Item = DiseaseId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Diseases that carry prevention text
    pub fn diseases_with_prevention(&self) -> Vec<DiseaseId> {
        self.records
            .iter()
            .filter(|r| r.prevention_text.is_some())
            .map(|r| r.id)
            .collect()
    }

    /// Flattened keyword corpus
    ///
    /// Disease order, then English before Hindi, then list order. Blank
    /// keywords are skipped.
    pub fn all_keywords(&self) -> Vec<(DiseaseId, &str)> {
        let mut corpus = Vec::new();
        for record in &self.records {
            for language in Language::all() {
                for keyword in record.keywords_for(*language) {
                    let keyword = keyword.trim();
                    if !keyword.is_empty() {
                        corpus.push((record.id, keyword));
                    }
                }
            }
        }
        corpus
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
