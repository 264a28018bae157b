//! Text processing for the health agent
//!
//! - **Language detection**: Devanagari-ratio classifier (English / Hindi)
//! - **Translation**: best-effort English → Hindi of assembled replies
//! - **SMS shaping**: sentence-aware truncation for length-limited channels
//!
//! # Example
//!
//! ```ignore
//! use health_agent_text_processing::{LanguageDetector, truncate_for_sms};
//!
//! let language = LanguageDetector::new().detect("मलेरिया के लक्षण");
//! let body = truncate_for_sms(&reply, 1600);
//! ```

pub mod detect;
pub mod sms;
pub mod translation;

mod error;

pub use detect::LanguageDetector;
pub use error::{Result, TextProcessingError};
pub use sms::{truncate_for_sms, CONTINUATION_NOTICE};
pub use translation::{
    create_translator, translate_reply, HttpTranslator, HttpTranslatorConfig, NoopTranslator,
    TranslatedReply,
};
