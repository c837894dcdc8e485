use async_trait::async_trait;
use parking_lot::Mutex;
use polyglot_tts::infrastructure::repositories::{TranslationRepository, TtsRepository};
use std::collections::BTreeMap;

/// Every fake synthesis returns these bytes (an MP3 frame header plus padding)
pub const FAKE_AUDIO: [u8; 8] = [0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00];

#[derive(Default)]
pub struct FakeTranslationProvider {
    calls: Mutex<Vec<(String, String, String)>>,
    failure: Mutex<Option<String>>,
}

impl FakeTranslationProvider {
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock() = Some(reason.to_string());
    }

    /// Recorded `(source, target, text)` triples
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TranslationRepository for FakeTranslationProvider {
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String, String> {
        self.calls
            .lock()
            .push((source.to_string(), target.to_string(), text.to_string()));
        match self.failure.lock().clone() {
            Some(reason) => Err(reason),
            None => Ok(format!("{} ({})", text, target)),
        }
    }
}

#[derive(Default)]
pub struct FakeTtsProvider {
    calls: Mutex<Vec<(String, String, bool, String)>>,
    failure: Mutex<Option<String>>,
    catalog_failure: Mutex<Option<String>>,
}

impl FakeTtsProvider {
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock() = Some(reason.to_string());
    }

    pub fn fail_catalog_with(&self, reason: &str) {
        *self.catalog_failure.lock() = Some(reason.to_string());
    }

    /// Recorded `(text, language, slow, tld)` tuples
    pub fn calls(&self) -> Vec<(String, String, bool, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl TtsRepository for FakeTtsProvider {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
        tld: &str,
    ) -> Result<Vec<u8>, String> {
        self.calls.lock().push((
            text.to_string(),
            language.to_string(),
            slow,
            tld.to_string(),
        ));
        match self.failure.lock().clone() {
            Some(reason) => Err(reason),
            None => Ok(FAKE_AUDIO.to_vec()),
        }
    }

    async fn supported_languages(&self) -> Result<BTreeMap<String, String>, String> {
        match self.catalog_failure.lock().clone() {
            Some(reason) => Err(reason),
            None => Ok(BTreeMap::from([
                ("de".to_string(), "German".to_string()),
                ("en".to_string(), "English".to_string()),
                ("fr".to_string(), "French".to_string()),
                ("zh-cn".to_string(), "Chinese (Simplified)".to_string()),
            ])),
        }
    }
}
