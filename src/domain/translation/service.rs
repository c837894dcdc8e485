use super::{TranslationError, TranslationOutcome};
use crate::domain::language::{provider_code, LanguageCode};
use crate::infrastructure::repositories::TranslationRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
}

impl TranslationService {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>) -> Self {
        Self { translation_repo }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text from an already resolved source language
    ///
    /// This operation:
    /// - Returns the text unchanged when source equals target (no provider call)
    /// - Rewrites both languages through the provider code table
    /// - Makes a single provider attempt and folds any failure into the outcome
    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> TranslationOutcome;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> TranslationOutcome {
        if source == target {
            tracing::info!(
                language = %source,
                "Source and target language match, skipping translation"
            );
            return TranslationOutcome::Unchanged {
                text: text.to_string(),
                source: source.clone(),
            };
        }

        let provider_source = provider_code(source);
        let provider_target = provider_code(target);
        tracing::info!(
            source = %source,
            target = %target,
            provider_target = provider_target,
            text_length = text.len(),
            "Translating text"
        );

        match self
            .translation_repo
            .translate(provider_source, provider_target, text)
            .await
        {
            Ok(translated) => TranslationOutcome::Translated {
                text: translated,
                source: source.clone(),
            },
            Err(reason) => {
                tracing::warn!(
                    error = %reason,
                    source = %source,
                    target = %target,
                    "Translation failed"
                );
                TranslationOutcome::Failed {
                    source: source.clone(),
                    error: TranslationError::Provider(reason),
                }
            }
        }
    }
}
