use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthesisError {
    #[error("Speech synthesis failed: {0}")]
    Provider(String),
    #[error("Speech synthesis returned no audio")]
    EmptyAudio,
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        AppError::ExternalService(err.to_string())
    }
}
