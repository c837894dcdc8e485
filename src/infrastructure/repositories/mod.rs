pub mod google_translate_repository;
pub mod google_tts_repository;
pub mod translation_repository;
pub mod tts_repository;


pub use google_translate_repository::GoogleTranslateRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
