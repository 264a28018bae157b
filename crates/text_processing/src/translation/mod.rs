//! Best-effort translation of assembled replies
//!
//! Replies are composed in English or as bilingual blocks. When the user wrote
//! in Hindi and the reply has no Devanagari at all, it is translated; any
//! failure leaves the English reply in place.

mod http;
mod noop;

pub use http::{HttpTranslator, HttpTranslatorConfig};
pub use noop::NoopTranslator;

use std::sync::Arc;
use std::time::Duration;

use health_agent_config::{TranslationConfig, TranslationProvider};
use health_agent_core::{Language, Script, Translator};

/// Create translator based on config
///
/// An HTTP client that cannot be built degrades to pass-through.
pub fn create_translator(config: &TranslationConfig) -> Arc<dyn Translator> {
    match config.provider {
        TranslationProvider::Http => {
            let http_config = HttpTranslatorConfig {
                endpoint: config.endpoint.clone(),
                api_key: config.api_key.clone(),
                timeout: Duration::from_secs(config.timeout_seconds),
            };

            match HttpTranslator::new(http_config) {
                Ok(translator) => {
                    tracing::info!(endpoint = %config.endpoint, "Using HTTP translator");
                    Arc::new(translator)
                },
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to build HTTP translator, falling back to pass-through"
                    );
                    Arc::new(NoopTranslator::new())
                },
            }
        },
        TranslationProvider::Disabled => Arc::new(NoopTranslator::new()),
    }
}

/// Outcome of the translation step
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedReply {
    pub text: String,
    pub language: Language,
    /// A translation was attempted and failed
    pub degraded: bool,
}

/// Translate `text` into Hindi when the user wrote Hindi and `text` has no
/// Devanagari
///
/// `current` is the reply language before this step; it is kept whenever no
/// translation happens.
pub async fn translate_reply(
    translator: &dyn Translator,
    text: &str,
    detected: Language,
    current: Language,
) -> TranslatedReply {
    let unchanged = |degraded| TranslatedReply {
        text: text.to_string(),
        language: current,
        degraded,
    };

    if detected != Language::Hindi || Script::Devanagari.appears_in(text) {
        return unchanged(false);
    }

    if !translator.supports_pair(Language::English, Language::Hindi) {
        return unchanged(false);
    }

    match translator
        .translate(text, Language::English, Language::Hindi)
        .await
    {
        Ok(translated) => TranslatedReply {
            text: translated,
            language: Language::Hindi,
            degraded: false,
        },
        Err(e) => {
            tracing::warn!(
                translator = translator.name(),
                error = %e,
                "Translation failed, passing English through"
            );
            unchanged(true)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct UpperTranslator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl UpperTranslator {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl Translator for UpperTranslator {
        async fn translate(
            &self,
            text: &str,
            _from: Language,
            _to: Language,
        ) -> health_agent_core::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(health_agent_core::Error::Translation("down".into()))
            } else {
                Ok(format!("हिंदी: {}", text))
            }
        }

        fn name(&self) -> &str {
            "upper"
        }
    }

    #[tokio::test]
    async fn test_devanagari_text_is_untouched() {
        let translator = UpperTranslator::new(false);
        let text = "🦟 MALARIA SYMPTOMS (मलेरिया के लक्षण)";
        let out = translate_reply(&translator, text, Language::Hindi, Language::English).await;
        assert_eq!(out.text, text);
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_english_user_not_translated() {
        let translator = UpperTranslator::new(false);
        let out =
            translate_reply(&translator, "Stay safe", Language::English, Language::English).await;
        assert_eq!(out.text, "Stay safe");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hindi_user_gets_translation() {
        let translator = UpperTranslator::new(false);
        let out =
            translate_reply(&translator, "Stay safe", Language::Hindi, Language::English).await;
        assert_eq!(out.text, "हिंदी: Stay safe");
        assert_eq!(out.language, Language::Hindi);
        assert!(!out.degraded);
    }

    #[tokio::test]
    async fn test_failure_passes_through() {
        let translator = UpperTranslator::new(true);
        let out =
            translate_reply(&translator, "Stay safe", Language::Hindi, Language::English).await;
        assert_eq!(out.text, "Stay safe");
        assert_eq!(out.language, Language::English);
        assert!(out.degraded);
    }

    #[tokio::test]
    async fn test_factory_disabled_is_noop() {
        let translator = create_translator(&TranslationConfig::default());
        assert_eq!(translator.name(), "noop");
        let out =
            translate_reply(translator.as_ref(), "Stay safe", Language::Hindi, Language::English)
                .await;
        assert_eq!(out.text, "Stay safe");
    }
}
