use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health, languages::LanguagesController, page, speech::SpeechController,
};
use crate::domain::tts::TtsService;
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Build the application router with all routes configured
pub fn build_router(
    tts_service: Arc<TtsService>,
    speech_controller: Arc<SpeechController>,
    languages_controller: Arc<LanguagesController>,
) -> Router {
    // Speech routes
    let speech_routes = Router::new()
        .route("/api/speech", post(SpeechController::synthesize))
        .route("/api/speech/audio", post(SpeechController::synthesize_audio))
        .with_state(speech_controller);

    // Catalog routes
    let language_routes = Router::new()
        .route("/api/languages", get(LanguagesController::list_languages))
        .with_state(languages_controller);

    Router::new()
        .route("/", get(page::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service)
        .merge(speech_routes)
        .merge(language_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    tts_service: Arc<TtsService>,
    speech_controller: Arc<SpeechController>,
    languages_controller: Arc<LanguagesController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = build_router(tts_service, speech_controller, languages_controller);

    // The form may be served from a dev server on another origin
    if config.is_development() {
        app = app.layer(CorsLayer::permissive());
    }

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
