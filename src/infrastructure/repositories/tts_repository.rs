use async_trait::async_trait;
use std::collections::BTreeMap;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting text into chunks if needed
/// - Merging audio chunks into a single audio stream
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech
    ///
    /// Returns merged audio data ready for playback (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `language` - Provider language token (`en`, `zh-CN`, ...)
    /// * `slow` - Whether to request the slower speaking rate
    /// * `tld` - Regional host variant that selects the accent (`com`, `co.uk`, ...)
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
        tld: &str,
    ) -> Result<Vec<u8>, String>;

    /// Languages the provider can speak, keyed by code
    async fn supported_languages(&self) -> Result<BTreeMap<String, String>, String>;
}
