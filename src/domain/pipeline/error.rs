use super::PipelineState;
use crate::domain::tts::SynthesisError;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter some text to convert")]
    Empty,
    #[error("Text is too long ({chars} characters). Please reduce to {max} characters or less")]
    TooLong { chars: usize, max: usize },
}

/// Failures that end a submission in `Failed`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{error}")]
    Synthesis {
        error: SynthesisError,
        /// Warnings collected before synthesis failed (e.g. a translation fallback)
        warnings: Vec<String>,
    },
}

impl PipelineError {
    /// The stage the submission was in when it failed
    pub fn failed_at(&self) -> PipelineState {
        match self {
            PipelineError::Validation(_) => PipelineState::Validating,
            PipelineError::Synthesis { .. } => PipelineState::Synthesizing,
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Validation(ValidationError::Empty) => {
                AppError::BadRequest(ValidationError::Empty.to_string())
            }
            PipelineError::Validation(e @ ValidationError::TooLong { .. }) => {
                AppError::PayloadTooLarge(e.to_string())
            }
            PipelineError::Synthesis { error, warnings } if warnings.is_empty() => error.into(),
            PipelineError::Synthesis { error, warnings } => AppError::WithWarnings {
                error: Box::new(error.into()),
                warnings,
            },
        }
    }
}
