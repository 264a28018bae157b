//! Lexical matcher over the keyword corpus
//!
//! Each keyword is one corpus document tagged with its owning disease. A query
//! is matched to the owner of the single most similar keyword.

use health_agent_core::{DiseaseId, MatchResult};
use thiserror::Error;

use crate::tfidf::{SparseVector, TfidfModel};
use crate::KnowledgeStore;

/// Confidence reported when a query cannot be matched at all
pub const FAILURE_CONFIDENCE: f32 = 0.1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Keyword corpus is empty")]
    EmptyCorpus,

    #[error("Query has no usable terms")]
    EmptyQuery,
}

impl From<MatchError> for health_agent_core::Error {
    fn from(err: MatchError) -> Self {
        health_agent_core::Error::Match(err.to_string())
    }
}

/// One corpus entry
#[derive(Debug, Clone)]
pub struct KeywordDocument {
    pub owner: DiseaseId,
    pub keyword: String,
    vector: SparseVector,
}

/// TF-IDF cosine matcher, built once and shared read-only
#[derive(Debug, Clone)]
pub struct LexicalMatcher {
    model: TfidfModel,
    documents: Vec<KeywordDocument>,
    failure_confidence: f32,
}

impl LexicalMatcher {
    /// Build from the store's keyword corpus
    pub fn new(store: &KnowledgeStore) -> Result<Self, MatchError> {
        Self::from_corpus(
            store
                .all_keywords()
                .into_iter()
                .map(|(id, kw)| (id, kw.to_string()))
                .collect(),
        )
    }

    /// Build from `(owner, keyword)` pairs in corpus order
    pub fn from_corpus(corpus: Vec<(DiseaseId, String)>) -> Result<Self, MatchError> {
        if corpus.is_empty() {
            return Err(MatchError::EmptyCorpus);
        }

        let texts: Vec<&str> = corpus.iter().map(|(_, k)| k.as_str()).collect();
        let model = TfidfModel::fit(&texts);
        if model.vocabulary_size() == 0 {
            return Err(MatchError::EmptyCorpus);
        }

        let documents = corpus
            .into_iter()
            .map(|(owner, keyword)| {
                let vector = model.transform(&keyword).unwrap_or_default();
                KeywordDocument {
                    owner,
                    keyword,
                    vector,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = model.vocabulary_size(),
            "Lexical matcher built"
        );

        Ok(Self {
            model,
            documents,
            failure_confidence: FAILURE_CONFIDENCE,
        })
    }

    pub fn with_failure_confidence(mut self, confidence: f32) -> Self {
        self.failure_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Best match, or an error if the query cannot be vectorized
    ///
    /// Ties go to the first keyword in corpus order. A query with no
    /// vocabulary overlap scores 0 with no disease.
    pub fn try_match(&self, query: &str) -> Result<MatchResult, MatchError> {
        let query_vector = self.model.transform(query).ok_or(MatchError::EmptyQuery)?;

        let mut best: Option<(&KeywordDocument, f64)> = None;
        for document in &self.documents {
            let score = query_vector.dot(&document.vector);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((document, score));
            }
        }

        Ok(match best {
            Some((document, score)) => MatchResult::new(Some(document.owner), score as f32),
            None => MatchResult::none(0.0),
        })
    }

    /// Best match, degrading failures to `(None, failure_confidence)`
    pub fn find_best_match(&self, query: &str) -> MatchResult {
        match self.try_match(query) {
            Ok(result) => {
                tracing::debug!(
                    disease = ?result.disease,
                    confidence = result.confidence,
                    "Lexical match"
                );
                result
            },
            Err(e) => {
                tracing::warn!(error = %e, query_len = query.len(), "Lexical match failed");
                MatchResult::none(self.failure_confidence)
            },
        }
    }

    pub fn documents(&self) -> &[KeywordDocument] {
        &self.documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> LexicalMatcher {
        LexicalMatcher::new(&KnowledgeStore::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_malaria_symptom_list() {
        let result = matcher().find_best_match("fever chills headache nausea");
        assert_eq!(result.disease, Some(DiseaseId::Malaria));
        assert!(result.confidence > 0.3);
        // "chills" only belongs to malaria
        assert!((result.confidence - 0.553).abs() < 0.01);
    }

    #[test]
    fn test_dengue_phrases() {
        let result = matcher().find_best_match("high fever severe headache");
        assert_eq!(result.disease, Some(DiseaseId::Dengue));
        assert!(result.confidence > 0.7);

        let result = matcher().find_best_match("joint pain and rash");
        assert_eq!(result.disease, Some(DiseaseId::Dengue));
    }

    #[test]
    fn test_bigram_match() {
        let result = matcher().find_best_match("loss of smell");
        assert_eq!(result.disease, Some(DiseaseId::Covid));
        assert!((result.confidence - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tie_goes_to_first_keyword() {
        // "fever" is a keyword of both malaria and covid
        let result = matcher().find_best_match("fever");
        assert_eq!(result.disease, Some(DiseaseId::Malaria));
    }

    #[test]
    fn test_hindi_keyword() {
        let result = matcher().find_best_match("मुझे बुखार है");
        assert_eq!(result.disease, Some(DiseaseId::Malaria));
    }

    #[test]
    fn test_gibberish_scores_zero() {
        let result = matcher().find_best_match("xyz123###");
        assert_eq!(result.disease, None);
        assert!(result.confidence <= 0.3);

        let result = matcher().find_best_match("covid ke lakshan");
        assert_eq!(result.accepted(0.3), None);
    }

    #[test]
    fn test_unvectorizable_query_degrades() {
        let m = matcher();
        assert_eq!(m.try_match(""), Err(MatchError::EmptyQuery));
        let result = m.find_best_match("### !!");
        assert_eq!(result, MatchResult::none(FAILURE_CONFIDENCE));
    }

    #[test]
    fn test_empty_corpus_rejected() {
        assert!(LexicalMatcher::from_corpus(vec![]).is_err());
        assert!(LexicalMatcher::from_corpus(vec![(DiseaseId::Covid, "the".into())]).is_err());
    }
}
