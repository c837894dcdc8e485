use super::{Accent, SynthesisError, SynthesisRequest};
use crate::domain::language::catalog::fallback_synthesis_languages;
use crate::domain::language::{provider_code, LanguageCode};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use moka::future::Cache;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Display heuristic, not measured from the audio
const SECONDS_PER_WORD: f64 = 0.5;

const CATALOG_CACHE_KEY: &str = "synthesis";

#[derive(Debug, Clone)]
pub struct SpeechSynthesisResult {
    pub audio_data: Vec<u8>,
    pub language: LanguageCode,
    pub accent: Accent,
    pub slow: bool,
    pub size_kb: f64,
    pub duration_seconds: f64,
}

/// Languages the synthesizer can speak, and whether the provider reported
/// them or the built-in list stood in
#[derive(Debug, Clone)]
pub struct SynthesisCatalog {
    pub languages: BTreeMap<String, String>,
    pub from_provider: bool,
}

impl SynthesisCatalog {
    /// Display name of a code, or the code itself when unknown
    pub fn name_of(&self, code: &LanguageCode) -> String {
        self.languages
            .get(code.as_str())
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }
}

pub fn size_kb(byte_count: usize) -> f64 {
    byte_count as f64 / 1024.0
}

pub fn estimate_duration_seconds(text: &str) -> f64 {
    text.split_whitespace().count() as f64 * SECONDS_PER_WORD
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    catalog_cache: Option<Cache<&'static str, Arc<SynthesisCatalog>>>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, catalog_cache_enabled: bool) -> Self {
        let catalog_cache = if catalog_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(1)
                    .time_to_live(Duration::from_secs(60 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            tts_repo,
            catalog_cache,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize the final text of a submission
    ///
    /// This operation:
    /// - Forces the default accent for any language other than English
    /// - Rewrites the language through the provider code table
    /// - Makes a single provider attempt
    ///
    /// Returns audio data along with size and duration estimates
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SpeechSynthesisResult, SynthesisError>;

    /// Languages offered as synthesis targets; never fails
    async fn supported_languages(&self) -> Arc<SynthesisCatalog>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SpeechSynthesisResult, SynthesisError> {
        let accent = request.accent.for_language(&request.language);
        if accent != request.accent {
            tracing::debug!(
                requested_accent = %request.accent,
                language = %request.language,
                "Accent only applies to English, using default"
            );
        }

        let language = provider_code(&request.language);
        tracing::info!(
            language = %request.language,
            provider_language = language,
            accent = %accent,
            slow = request.slow,
            text_length = request.text.len(),
            "Starting TTS synthesis"
        );

        let audio_data = self
            .tts_repo
            .synthesize(&request.text, language, request.slow, accent.tld())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = %request.language, "TTS synthesis failed");
                SynthesisError::Provider(e)
            })?;

        if audio_data.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(SpeechSynthesisResult {
            size_kb: size_kb(audio_data.len()),
            duration_seconds: estimate_duration_seconds(&request.text),
            audio_data,
            language: request.language,
            accent,
            slow: request.slow,
        })
    }

    async fn supported_languages(&self) -> Arc<SynthesisCatalog> {
        if let Some(cache) = &self.catalog_cache {
            if let Some(cached) = cache.get(&CATALOG_CACHE_KEY).await {
                return cached;
            }
        }

        match self.tts_repo.supported_languages().await {
            Ok(languages) => {
                let catalog = Arc::new(SynthesisCatalog {
                    languages,
                    from_provider: true,
                });
                if let Some(cache) = &self.catalog_cache {
                    cache.insert(CATALOG_CACHE_KEY, catalog.clone()).await;
                }
                catalog
            }
            Err(e) => {
                // Not cached, so the next lookup retries the provider
                tracing::warn!(error = %e, "Could not list TTS languages, using built-in list");
                Arc::new(SynthesisCatalog {
                    languages: fallback_synthesis_languages(),
                    from_provider: false,
                })
            }
        }
    }
}
