pub mod catalog;
pub mod detector;

pub use catalog::{provider_code, LanguageInfo};
pub use detector::LanguageResolver;

use serde::{Deserialize, Serialize};

/// Sentinel accepted as a source language meaning "detect it from the text"
pub const AUTO_DETECT: &str = "auto";

/// Language identifier as used by the catalogs (`en`, `fr`, `zh-cn`, ...)
///
/// Codes are not validated on construction: the translation and synthesis
/// catalogs disagree on what is valid, so each provider gets to reject what it
/// does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == "en"
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Source language chosen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLanguage {
    Auto,
    Explicit(LanguageCode),
}

impl From<String> for SourceLanguage {
    fn from(code: String) -> Self {
        if code == AUTO_DETECT {
            SourceLanguage::Auto
        } else {
            SourceLanguage::Explicit(LanguageCode::new(code))
        }
    }
}

impl From<SourceLanguage> for String {
    fn from(source: SourceLanguage) -> Self {
        source.to_string()
    }
}

impl Default for SourceLanguage {
    fn default() -> Self {
        SourceLanguage::Auto
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLanguage::Auto => write!(f, "{}", AUTO_DETECT),
            SourceLanguage::Explicit(code) => write!(f, "{}", code),
        }
    }
}
