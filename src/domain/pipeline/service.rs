use super::{
    PipelineError, PipelineState, StateTrail, Submission, SubmissionReport, ValidationError,
};
use crate::domain::language::LanguageResolver;
use crate::domain::translation::{TranslationOutcome, TranslationService, TranslationServiceApi};
use crate::domain::tts::{SynthesisRequest, TtsService, TtsServiceApi};
use async_trait::async_trait;
use std::sync::Arc;

const TRANSLATION_FALLBACK_NOTICE: &str = "Converting original text to speech instead";

pub struct PipelineService {
    language_resolver: Arc<LanguageResolver>,
    translation_service: Arc<TranslationService>,
    tts_service: Arc<TtsService>,
    max_text_chars: usize,
}

impl PipelineService {
    pub fn new(
        language_resolver: Arc<LanguageResolver>,
        translation_service: Arc<TranslationService>,
        tts_service: Arc<TtsService>,
        max_text_chars: usize,
    ) -> Self {
        Self {
            language_resolver,
            translation_service,
            tts_service,
            max_text_chars,
        }
    }
}

#[async_trait]
pub trait PipelineServiceApi: Send + Sync {
    /// Run one submission through the pipeline
    ///
    /// This operation:
    /// - Rejects empty or over-long text before any provider is contacted
    /// - Resolves the source language and translates, when enabled
    /// - Falls back to the original text if translation fails
    /// - Synthesizes the final text in the target language
    async fn process(&self, submission: Submission) -> Result<SubmissionReport, PipelineError>;
}

#[async_trait]
impl PipelineServiceApi for PipelineService {
    async fn process(&self, submission: Submission) -> Result<SubmissionReport, PipelineError> {
        let mut trail = StateTrail::new();

        // 1. Validate
        trail.advance(PipelineState::Validating);
        if let Err(e) = self.validate(&submission.text) {
            trail.advance(PipelineState::Failed);
            tracing::warn!(error = %e, "Submission rejected");
            return Err(e.into());
        }

        let mut warnings = Vec::new();
        let mut final_text = submission.text.clone();
        let mut translated_text = None;
        let mut source_language = None;

        // 2. Translate (optional)
        if submission.enable_translation {
            trail.advance(PipelineState::Translating);
            let source = self
                .language_resolver
                .resolve(&submission.source_language, &submission.text);

            let outcome = self
                .translation_service
                .translate(&submission.text, &source, &submission.target_language)
                .await;

            source_language = Some(outcome.source().clone());
            match outcome {
                TranslationOutcome::Unchanged { text, .. }
                | TranslationOutcome::Translated { text, .. } => {
                    final_text = text.clone();
                    translated_text = Some(text);
                }
                TranslationOutcome::Failed { error, .. } => {
                    // Speak the original text, still in the target language
                    warnings.push(error.to_string());
                    warnings.push(TRANSLATION_FALLBACK_NOTICE.to_string());
                }
            }
        }

        // 3. Synthesize
        trail.advance(PipelineState::Synthesizing);
        let synthesis = self
            .tts_service
            .synthesize(SynthesisRequest {
                text: final_text.clone(),
                language: submission.target_language.clone(),
                slow: submission.slow,
                accent: submission.accent,
            })
            .await;

        let synthesis = match synthesis {
            Ok(result) => result,
            Err(error) => {
                trail.advance(PipelineState::Failed);
                return Err(PipelineError::Synthesis { error, warnings });
            }
        };

        trail.advance(PipelineState::Done);
        tracing::info!(
            language = %synthesis.language,
            accent = %synthesis.accent,
            size_kb = format!("{:.2}", synthesis.size_kb),
            duration_seconds = synthesis.duration_seconds,
            warnings = warnings.len(),
            "Submission completed"
        );

        Ok(SubmissionReport {
            final_text,
            translated_text,
            source_language,
            synthesis,
            warnings,
            trail,
        })
    }
}

impl PipelineService {
    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let chars = text.chars().count();
        if chars > self.max_text_chars {
            return Err(ValidationError::TooLong {
                chars,
                max: self.max_text_chars,
            });
        }

        Ok(())
    }
}
