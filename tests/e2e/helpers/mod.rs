use polyglot_tts::{
    controllers::{languages::LanguagesController, speech::SpeechController},
    domain::{
        language::LanguageResolver,
        pipeline::{PipelineService, MAX_TEXT_CHARS},
        translation::TranslationService,
        tts::TtsService,
    },
    infrastructure::http::build_router,
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;
pub mod fakes;

use api_client::TestClient;
use fakes::{FakeTranslationProvider, FakeTtsProvider};

pub struct TestContext {
    pub client: TestClient,
    pub translation: Arc<FakeTranslationProvider>,
    pub tts: Arc<FakeTtsProvider>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let translation = Arc::new(FakeTranslationProvider::default());
            let tts = Arc::new(FakeTtsProvider::default());

            let translation_service = Arc::new(TranslationService::new(translation.clone()));
            // Cache disabled so tests can flip the catalog provider between calls
            let tts_service = Arc::new(TtsService::new(tts.clone(), false));
            let pipeline_service = Arc::new(PipelineService::new(
                Arc::new(LanguageResolver::new()),
                translation_service,
                tts_service.clone(),
                MAX_TEXT_CHARS,
            ));
            let speech_controller = Arc::new(SpeechController::new(
                pipeline_service,
                tts_service.clone(),
            ));
            let languages_controller = Arc::new(LanguagesController::new(tts_service.clone()));

            let app = build_router(tts_service, speech_controller, languages_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                translation,
                tts,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}
