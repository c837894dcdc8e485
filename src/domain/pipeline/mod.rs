pub mod error;
pub mod service;
pub mod state;

pub use error::{PipelineError, ValidationError};
pub use service::{PipelineService, PipelineServiceApi};
pub use state::{PipelineState, StateTrail};

use crate::domain::language::{LanguageCode, SourceLanguage};
use crate::domain::tts::{Accent, SpeechSynthesisResult};

/// Default upper bound on submission length, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// One form submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub text: String,
    pub enable_translation: bool,
    pub source_language: SourceLanguage,
    /// Translation target when translating, otherwise the output language
    pub target_language: LanguageCode,
    pub accent: Accent,
    pub slow: bool,
}

/// What a successful submission produced
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    /// The text that was actually spoken
    pub final_text: String,
    /// Set only when translation ran and succeeded
    pub translated_text: Option<String>,
    /// Resolved source language, set only when translation ran
    pub source_language: Option<LanguageCode>,
    pub synthesis: SpeechSynthesisResult,
    pub warnings: Vec<String>,
    pub trail: StateTrail,
}
