//! HTTP translation client
//!
//! Speaks the LibreTranslate JSON protocol:
//! `POST {endpoint}` with `{"q", "source", "target", "format", "api_key"}`,
//! answered by `{"translatedText"}`.

use std::time::Duration;

use async_trait::async_trait;
use health_agent_core::{Language, Translator};
use serde::{Deserialize, Serialize};

use crate::TextProcessingError;

/// HTTP translator configuration
#[derive(Debug, Clone)]
pub struct HttpTranslatorConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/translate".to_string(),
            api_key: None,
            timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct HttpTranslator {
    client: reqwest::Client,
    config: HttpTranslatorConfig,
}

impl HttpTranslator {
    pub fn new(config: HttpTranslatorConfig) -> Result<Self, TextProcessingError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TextProcessingError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    async fn request(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TextProcessingError> {
        let body = TranslateRequest {
            q: text,
            source: from.code(),
            target: to.code(),
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TextProcessingError::Status(status.as_u16()));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TextProcessingError::InvalidResponse(e.to_string()))?;

        if parsed.translated_text.trim().is_empty() {
            return Err(TextProcessingError::InvalidResponse(
                "empty translation".to_string(),
            ));
        }

        Ok(parsed.translated_text)
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> health_agent_core::Result<String> {
        if !self.supports_pair(from, to) {
            return Err(TextProcessingError::UnsupportedPair {
                from: from.code().to_string(),
                to: to.code().to_string(),
            }
            .into());
        }

        Ok(self.request(text, from, to).await?)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let body = TranslateRequest {
            q: "Stay safe",
            source: Language::English.code(),
            target: Language::Hindi.code(),
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["source"], "en");
        assert_eq!(json["target"], "hi");
        assert!(json.get("api_key").is_none());
    }

    #[tokio::test]
    async fn test_same_language_rejected() {
        let translator = HttpTranslator::new(HttpTranslatorConfig::default()).unwrap();
        let result = translator
            .translate("x", Language::Hindi, Language::Hindi)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        let translator = HttpTranslator::new(HttpTranslatorConfig {
            endpoint: "http://127.0.0.1:9/translate".to_string(),
            timeout: Duration::from_millis(500),
            ..Default::default()
        })
        .unwrap();
        let result = translator
            .translate("fever", Language::English, Language::Hindi)
            .await;
        assert!(matches!(result, Err(health_agent_core::Error::Translation(_))));
    }
}
