use super::{LanguageCode, SourceLanguage};
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Languages the detector chooses between; every one maps onto a
/// translation catalog code
pub const DETECTABLE_LANGUAGES: [Language; 34] = [
    Language::English,
    Language::Spanish,
    Language::French,
    Language::German,
    Language::Italian,
    Language::Portuguese,
    Language::Russian,
    Language::Japanese,
    Language::Korean,
    Language::Chinese,
    Language::Arabic,
    Language::Hindi,
    Language::Dutch,
    Language::Polish,
    Language::Turkish,
    Language::Vietnamese,
    Language::Thai,
    Language::Indonesian,
    Language::Swedish,
    Language::Bokmal,
    Language::Nynorsk,
    Language::Danish,
    Language::Finnish,
    Language::Greek,
    Language::Hebrew,
    Language::Bengali,
    Language::Tamil,
    Language::Telugu,
    Language::Urdu,
    Language::Persian,
    Language::Romanian,
    Language::Czech,
    Language::Hungarian,
    Language::Ukrainian,
];

/// Resolves the effective source language of a submission.
///
/// The detector is built once and shared; lingua's models are statistical
/// but carry no random state, so identical input always yields the same code.
pub struct LanguageResolver {
    language_detector: LanguageDetector,
}

impl LanguageResolver {
    pub fn new() -> Self {
        let language_detector =
            LanguageDetectorBuilder::from_languages(&DETECTABLE_LANGUAGES).build();
        Self { language_detector }
    }

    /// Explicit codes pass through untouched; `auto` runs detection and
    /// falls back to English when nothing can be detected
    pub fn resolve(&self, source: &SourceLanguage, text: &str) -> LanguageCode {
        match source {
            SourceLanguage::Explicit(code) => code.clone(),
            SourceLanguage::Auto => match self.detect(text) {
                Some(code) => {
                    tracing::info!(language_detected = %code, "Source language detected");
                    code
                }
                None => {
                    tracing::warn!("Could not detect language, falling back to English");
                    LanguageCode::english()
                }
            },
        }
    }

    pub fn detect(&self, text: &str) -> Option<LanguageCode> {
        self.language_detector
            .detect_language_of(text)
            .map(catalog_code)
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Report detected languages the way the translation catalog spells them
fn catalog_code(language: Language) -> LanguageCode {
    match language {
        Language::Chinese => LanguageCode::new("zh-cn"),
        Language::Bokmal | Language::Nynorsk => LanguageCode::new("no"),
        other => LanguageCode::new(other.iso_code_639_1().to_string()),
    }
}
