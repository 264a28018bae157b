//! Devanagari-ratio language detection
//!
//! Coarse heuristic for the English/Hindi pair only. It must not be used to
//! identify any other language.

use health_agent_core::{Language, Script};

/// Share of Devanagari characters above which text counts as Hindi
pub const HINDI_RATIO_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    threshold: f32,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            threshold: HINDI_RATIO_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Devanagari code points divided by alphabetic characters
    ///
    /// `None` when the text has no alphabetic characters.
    pub fn devanagari_ratio(text: &str) -> Option<f32> {
        let alphabetic = text.chars().filter(|c| c.is_alphabetic()).count();
        if alphabetic == 0 {
            return None;
        }

        let devanagari = text
            .chars()
            .filter(|c| Script::Devanagari.contains_char(*c))
            .count();

        Some(devanagari as f32 / alphabetic as f32)
    }

    pub fn detect(&self, text: &str) -> Language {
        match Self::devanagari_ratio(text) {
            Some(ratio) if ratio > self.threshold => Language::Hindi,
            _ => Language::English,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_hindi() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("मलेरिया के लक्षण क्या हैं"), Language::Hindi);
    }

    #[test]
    fn test_pure_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("what are dengue symptoms"), Language::English);
        // Romanised Hindi stays English
        assert_eq!(detector.detect("covid ke lakshan"), Language::English);
    }

    #[test]
    fn test_empty_and_non_alphabetic() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(""), Language::English);
        assert_eq!(detector.detect("123 ### !!"), Language::English);
        assert_eq!(LanguageDetector::devanagari_ratio(""), None);
    }

    #[test]
    fn test_mixed_text_ratio() {
        let detector = LanguageDetector::new();
        // 5 Devanagari characters out of 22 alphabetic ones
        assert_eq!(detector.detect("what is dengue fever बुखार"), Language::English);
        // Mostly Devanagari
        assert_eq!(detector.detect("dengue का बचाव कैसे करें"), Language::Hindi);
    }
}
