#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation error: {0}")]
    Provider(String),
}
