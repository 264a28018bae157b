//! TF-IDF vectorization over unigrams and bigrams
//!
//! Weighting: raw term counts times smoothed IDF `ln((1 + n) / (1 + df)) + 1`,
//! vectors L2-normalised so a dot product is the cosine similarity.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::is_stop_word;

/// Shortest token kept, in characters
const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase, split on Unicode word boundaries, drop short tokens and
/// stopwords, then append bigrams of the remaining tokens.
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .unicode_words()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// Sparse L2-normalised vector, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_by_key(|(index, _)| *index);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in entries.iter_mut() {
                *w /= norm;
            }
        }

        Self { entries }
    }

    /// Dot product (cosine similarity for normalised vectors)
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a, wa) = self.entries[i];
            let (b, wb) = other.entries[j];
            match a.cmp(&b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                },
            }
        }
        sum
    }

    /// True when no term of the input is in the vocabulary
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Fitted vocabulary and IDF weights
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit on a corpus, one document per entry
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for document in documents {
            let mut seen: Vec<usize> = Vec::new();
            for term in analyze(document.as_ref()) {
                let next = vocabulary.len();
                let index = *vocabulary.entry(term).or_insert(next);
                if index == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen.contains(&index) {
                    seen.push(index);
                    document_frequency[index] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Vectorize `text`
    ///
    /// Returns `None` when the text has no terms at all (empty or only
    /// stopwords). Terms outside the vocabulary are ignored, so a text with
    /// terms but no overlap yields a zero vector.
    pub fn transform(&self, text: &str) -> Option<SparseVector> {
        let terms = analyze(text);
        if terms.is_empty() {
            return None;
        }

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in &terms {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += self.idf[index];
            }
        }

        Some(SparseVector::from_counts(counts))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&i| self.idf[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_drops_stopwords_before_bigrams() {
        assert_eq!(analyze("Loss of Taste"), vec!["loss", "taste", "loss taste"]);
    }

    #[test]
    fn test_analyze_short_tokens_and_punctuation() {
        assert_eq!(analyze("a fever!!! x"), vec!["fever"]);
        assert!(analyze("").is_empty());
        assert!(analyze("the of and").is_empty());
        assert_eq!(analyze("xyz123###"), vec!["xyz123"]);
    }

    #[test]
    fn test_analyze_devanagari() {
        assert_eq!(analyze("जी मिचलाना"), vec!["जी", "मिचलाना", "जी मिचलाना"]);
    }

    #[test]
    fn test_idf_smoothing() {
        let model = TfidfModel::fit(&["fever", "high fever", "rash"]);
        // df(fever) = 2, n = 3
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((model.idf("fever").unwrap() - expected).abs() < 1e-12);
        // df(rash) = 1
        let expected = 2.0f64.ln() + 1.0;
        assert!((model.idf("rash").unwrap() - expected).abs() < 1e-12);
        assert_eq!(model.vocabulary_size(), 4);
    }

    #[test]
    fn test_identical_text_has_unit_similarity() {
        let model = TfidfModel::fit(&["loss of smell", "sore throat"]);
        let a = model.transform("loss of smell").unwrap();
        let b = model.transform("LOSS OF SMELL").unwrap();
        assert!((a.dot(&b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero() {
        let model = TfidfModel::fit(&["fever"]);
        let v = model.transform("covid ke lakshan").unwrap();
        assert!(v.is_zero());
        assert!(model.transform("   ").is_none());
    }
}
