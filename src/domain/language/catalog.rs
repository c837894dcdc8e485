use super::LanguageCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Languages offered as translation source/target, in display order
pub const TRANSLATION_LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto-detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("tr", "Turkish"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ur", "Urdu"),
    ("fa", "Persian"),
    ("ro", "Romanian"),
    ("cs", "Czech"),
    ("hu", "Hungarian"),
    ("uk", "Ukrainian"),
];

/// Used when the speech provider cannot report its own language list
pub const FALLBACK_SYNTHESIS_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh-cn", "Chinese (Simplified)"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
];

/// Catalog codes whose provider token differs from the catalog spelling.
/// Consulted before every provider call; codes not listed go through as-is.
pub const PROVIDER_CODE_OVERRIDES: &[(&str, &str)] = &[("zh-cn", "zh-CN"), ("zh-tw", "zh-TW")];

/// Language entry as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

/// Map a catalog code onto the token the remote providers expect
pub fn provider_code(code: &LanguageCode) -> &str {
    PROVIDER_CODE_OVERRIDES
        .iter()
        .find(|(catalog, _)| *catalog == code.as_str())
        .map(|(_, provider)| *provider)
        .unwrap_or_else(|| code.as_str())
}

pub fn translation_languages() -> Vec<LanguageInfo> {
    TRANSLATION_LANGUAGES
        .iter()
        .map(|(code, name)| LanguageInfo {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn fallback_synthesis_languages() -> BTreeMap<String, String> {
    to_map(FALLBACK_SYNTHESIS_LANGUAGES)
}

pub fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

/// Catalog entries ordered by display name, the way the form lists them
pub fn sorted_by_name(languages: &BTreeMap<String, String>) -> Vec<LanguageInfo> {
    let mut entries: Vec<LanguageInfo> = languages
        .iter()
        .map(|(code, name)| LanguageInfo {
            code: code.clone(),
            name: name.clone(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
    entries
}
