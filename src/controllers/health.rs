use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::tts::{TtsService, TtsServiceApi};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready as long as the process serves requests; `tts` reports whether the
/// provider answered the language lookup or the built-in list was used
pub async fn health_ready(State(tts_service): State<Arc<TtsService>>) -> impl IntoResponse {
    let catalog = tts_service.supported_languages().await;
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": if catalog.from_provider { "available" } else { "degraded" },
        })),
    )
}
