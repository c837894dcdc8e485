use async_trait::async_trait;

/// Repository for translation operations.
/// Abstracts the underlying translation provider.
///
/// Implementations receive provider-ready language tokens (see
/// `domain::language::provider_code`) and make exactly one attempt per call.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` from `source` into `target`
    ///
    /// # Errors
    /// Returns a description of the failure for any network, language-pair or
    /// response-format problem
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String, String>;
}
