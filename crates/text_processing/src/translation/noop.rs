//! Pass-through translator

use async_trait::async_trait;
use health_agent_core::{Language, Result, Translator};

/// Returns the input unchanged
#[derive(Debug, Clone, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        Ok(text.to_string())
    }

    fn supports_pair(&self, _from: Language, _to: Language) -> bool {
        false
    }

    fn name(&self) -> &str {
        "noop"
    }
}
