pub mod accent;
pub mod error;
pub mod service;

pub use accent::Accent;
pub use error::SynthesisError;
pub use service::{
    estimate_duration_seconds, size_kb, SpeechSynthesisResult, SynthesisCatalog, TtsService,
    TtsServiceApi,
};

use crate::domain::language::LanguageCode;

/// Input of the synthesis stage
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub language: LanguageCode,
    pub slow: bool,
    pub accent: Accent,
}
