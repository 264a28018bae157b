//! Translation trait

use crate::{Language, Result};
use async_trait::async_trait;

/// Translation interface
///
/// Implementations:
/// - `HttpTranslator` - JSON POST to a translation endpoint
/// - `NoopTranslator` - Returns input unchanged
///
/// # Example
///
/// ```ignore
/// let translator: Arc<dyn Translator> = create_translator(&config)?;
/// let hindi = translator.translate(text, Language::English, Language::Hindi).await?;
/// ```
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate text between languages
    ///
    /// # Arguments
    /// * `text` - Text to translate
    /// * `from` - Source language
    /// * `to` - Target language
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Check if language pair is supported
    fn supports_pair(&self, from: Language, to: Language) -> bool {
        from != to
    }

    /// Get translator name for logging
    fn name(&self) -> &str;
}
