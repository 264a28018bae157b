//! Disease identifiers

use serde::{Deserialize, Serialize};

/// Diseases known to the knowledge store
///
/// Declaration order is corpus order for the lexical matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseId {
    Malaria,
    Dengue,
    Covid,
    Typhoid,
}

impl DiseaseId {
    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Malaria => "malaria",
            Self::Dengue => "dengue",
            Self::Covid => "covid",
            Self::Typhoid => "typhoid",
        }
    }

    /// Display name used in user-facing lists
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Malaria => "Malaria",
            Self::Dengue => "Dengue",
            Self::Covid => "COVID-19",
            Self::Typhoid => "Typhoid",
        }
    }

    /// Parse a dialog parameter value (case-insensitive, common aliases)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "malaria" | "मलेरिया" => Some(Self::Malaria),
            "dengue" | "डेंगू" => Some(Self::Dengue),
            "covid" | "covid-19" | "covid19" | "covid 19" | "corona" | "coronavirus"
            | "कोविड" | "कोरोना" => Some(Self::Covid),
            "typhoid" | "टाइफाइड" => Some(Self::Typhoid),
            _ => None,
        }
    }

    /// All diseases in corpus order
    pub fn all() -> &'static [DiseaseId] {
        &[Self::Malaria, Self::Dengue, Self::Covid, Self::Typhoid]
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_loose() {
        assert_eq!(DiseaseId::from_str_loose("Malaria"), Some(DiseaseId::Malaria));
        assert_eq!(DiseaseId::from_str_loose("COVID-19"), Some(DiseaseId::Covid));
        assert_eq!(DiseaseId::from_str_loose("डेंगू"), Some(DiseaseId::Dengue));
        assert_eq!(DiseaseId::from_str_loose(""), None);
        assert_eq!(DiseaseId::from_str_loose("cholera"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for id in DiseaseId::all() {
            assert_eq!(DiseaseId::from_str_loose(id.as_str()), Some(*id));
        }
    }
}
