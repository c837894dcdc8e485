use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        language::{LanguageCode, SourceLanguage},
        pipeline::{PipelineService, PipelineServiceApi, Submission, SubmissionReport},
        tts::{Accent, TtsService, TtsServiceApi},
    },
    error::AppResult,
};

pub const AUDIO_MIME_TYPE: &str = "audio/mp3";
pub const AUDIO_FILENAME: &str = "audio.mp3";

/// Request for POST /api/speech and /api/speech/audio
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    #[serde(default)]
    pub enable_translation: bool,
    #[serde(default)]
    pub source_language: SourceLanguage,
    #[serde(default = "LanguageCode::english")]
    pub target_language: LanguageCode,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub slow: bool,
}

impl From<SpeechRequest> for Submission {
    fn from(request: SpeechRequest) -> Self {
        Submission {
            text: request.text,
            enable_translation: request.enable_translation,
            source_language: request.source_language,
            target_language: request.target_language,
            accent: request.accent,
            slow: request.slow,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// Response for POST /api/speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub state: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    pub language: String,
    pub language_name: String,
    pub accent: String,
    pub slow: bool,
    pub size_kb: f64,
    pub duration_seconds: f64,
    pub audio_base64: String,
    pub download: DownloadLink,
    pub warnings: Vec<String>,
}

/// Data URI download link for the synthesized audio
pub fn audio_download_link(audio: &[u8]) -> DownloadLink {
    DownloadLink {
        href: format!("data:{};base64,{}", AUDIO_MIME_TYPE, BASE64.encode(audio)),
        filename: AUDIO_FILENAME.to_string(),
    }
}

pub struct SpeechController {
    pipeline_service: Arc<PipelineService>,
    tts_service: Arc<TtsService>,
}

impl SpeechController {
    pub fn new(pipeline_service: Arc<PipelineService>, tts_service: Arc<TtsService>) -> Self {
        Self {
            pipeline_service,
            tts_service,
        }
    }

    /// POST /api/speech - Translate (optionally) and synthesize, returning JSON
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<Json<SpeechResponse>> {
        let report = controller
            .pipeline_service
            .process(request.into())
            .await?;

        let catalog = controller.tts_service.supported_languages().await;
        let language_name = catalog.name_of(&report.synthesis.language);

        Ok(Json(Self::to_response(report, language_name)))
    }

    /// POST /api/speech/audio - Same pipeline, returning the MP3 itself
    pub async fn synthesize_audio(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let report = controller
            .pipeline_service
            .process(request.into())
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"audio.mp3\""),
        );
        insert_header(
            &mut headers,
            "x-size-kb",
            &format!("{:.2}", report.synthesis.size_kb),
        );
        insert_header(
            &mut headers,
            "x-duration-seconds",
            &format!("{:.1}", report.synthesis.duration_seconds),
        );
        insert_header(&mut headers, "x-language", report.synthesis.language.as_str());
        if let Some(source) = &report.source_language {
            insert_header(&mut headers, "x-detected-language", source.as_str());
        }
        if let Some(warning) = report.warnings.first() {
            insert_header(&mut headers, "x-translation-warning", warning);
        }

        Ok((StatusCode::OK, headers, Body::from(report.synthesis.audio_data)))
    }

    fn to_response(report: SubmissionReport, language_name: String) -> SpeechResponse {
        let synthesis = report.synthesis;
        SpeechResponse {
            state: report.trail.current().label().to_lowercase(),
            text: report.final_text,
            translated_text: report.translated_text,
            detected_language: report.source_language.map(|code| code.to_string()),
            language: synthesis.language.to_string(),
            language_name,
            accent: synthesis.accent.tld().to_string(),
            slow: synthesis.slow,
            size_kb: synthesis.size_kb,
            duration_seconds: synthesis.duration_seconds,
            download: audio_download_link(&synthesis.audio_data),
            audio_base64: BASE64.encode(&synthesis.audio_data),
            warnings: report.warnings,
        }
    }
}

/// Values that cannot be sent as a header (e.g. non-visible characters) are skipped
fn insert_header(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}
