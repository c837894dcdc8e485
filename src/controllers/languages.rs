use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{
    language::{
        catalog::{sorted_by_name, translation_languages},
        LanguageInfo,
    },
    tts::{Accent, TtsService, TtsServiceApi},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct AccentInfo {
    pub code: String,
    pub name: String,
}

/// Response for GET /api/languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub translation: Vec<LanguageInfo>,
    pub synthesis: Vec<LanguageInfo>,
    /// Whether `synthesis` came from the provider or the built-in list
    pub synthesis_from_provider: bool,
    pub accents: Vec<AccentInfo>,
}

pub struct LanguagesController {
    tts_service: Arc<TtsService>,
}

impl LanguagesController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /api/languages - Catalogs the form is built from
    pub async fn list_languages(
        State(controller): State<Arc<LanguagesController>>,
    ) -> Json<LanguagesResponse> {
        let catalog = controller.tts_service.supported_languages().await;

        Json(LanguagesResponse {
            translation: translation_languages(),
            synthesis: sorted_by_name(&catalog.languages),
            synthesis_from_provider: catalog.from_provider,
            accents: Accent::ALL
                .iter()
                .map(|accent| AccentInfo {
                    code: accent.tld().to_string(),
                    name: accent.label().to_string(),
                })
                .collect(),
        })
    }
}
