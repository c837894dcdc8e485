use polyglot_tts::controllers::{languages::LanguagesController, speech::SpeechController};
use polyglot_tts::domain::{
    language::LanguageResolver, pipeline::PipelineService, translation::TranslationService,
    tts::TtsService,
};
use polyglot_tts::infrastructure::config::{Config, LogFormat};
use polyglot_tts::infrastructure::http::start_http_server;
use polyglot_tts::infrastructure::repositories::{GoogleTranslateRepository, GoogleTtsRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Polyglot TTS on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        translate_api_url = %config.translate_api_url,
        tts_host_prefix = %config.tts_host_prefix,
        language_cache_enabled = config.language_cache_enabled,
        max_text_chars = config.max_text_chars,
        "Provider configuration loaded"
    );

    let config = Arc::new(config);
    // Default client settings: no timeout override on provider calls
    let http_client = reqwest::Client::new();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject http client)
    tracing::info!("Instantiating repositories...");
    let translation_repo = Arc::new(GoogleTranslateRepository::new(
        http_client.clone(),
        config.translate_api_url.clone(),
    ));
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        http_client,
        config.tts_host_prefix.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let language_resolver = Arc::new(LanguageResolver::new());
    let translation_service = Arc::new(TranslationService::new(translation_repo));
    let tts_service = Arc::new(TtsService::new(tts_repo, config.language_cache_enabled));
    let pipeline_service = Arc::new(PipelineService::new(
        language_resolver,
        translation_service,
        tts_service.clone(),
        config.max_text_chars,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(SpeechController::new(
        pipeline_service,
        tts_service.clone(),
    ));
    let languages_controller = Arc::new(LanguagesController::new(tts_service.clone()));

    // Start HTTP server with all routes
    start_http_server(config, tts_service, speech_controller, languages_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "polyglot_tts=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
