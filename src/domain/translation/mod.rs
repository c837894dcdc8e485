pub mod error;
pub mod service;

pub use error::TranslationError;
pub use service::{TranslationService, TranslationServiceApi};

use crate::domain::language::LanguageCode;

/// Result of the translation stage: either text to speak or a failure,
/// never both
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// Source and target matched; the text was not sent anywhere
    Unchanged { text: String, source: LanguageCode },
    Translated { text: String, source: LanguageCode },
    Failed {
        source: LanguageCode,
        error: TranslationError,
    },
}

impl TranslationOutcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Unchanged { text, .. } | Self::Translated { text, .. } => Some(text),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&TranslationError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn source(&self) -> &LanguageCode {
        match self {
            Self::Unchanged { source, .. }
            | Self::Translated { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }
}
