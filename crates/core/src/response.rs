//! Response envelope returned by the pipeline

use crate::Language;
use serde::{Deserialize, Serialize};

/// Where a response text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    KnowledgeBase,
    MlMatch,
    Default,
    Fallback,
    GovernmentApi,
    Emergency,
}

impl ResponseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KnowledgeBase => "knowledge_base",
            Self::MlMatch => "ml_match",
            Self::Default => "default",
            Self::Fallback => "fallback",
            Self::GovernmentApi => "government_api",
            Self::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Webhook,
    WhatsApp,
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webhook => "webhook",
            Self::WhatsApp => "whatsapp",
            Self::Sms => "sms",
        }
    }

    /// Whether replies on this channel are length-limited
    pub fn truncates(&self) -> bool {
        matches!(self, Self::Sms)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assembled reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub text: String,
    pub confidence: f32,
    pub language: Language,
    pub source: ResponseSource,
}

impl ResponseEnvelope {
    pub fn new(
        text: impl Into<String>,
        confidence: f32,
        language: Language,
        source: ResponseSource,
    ) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
            language,
            source,
        }
    }
}
