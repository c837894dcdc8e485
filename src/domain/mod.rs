pub mod language;
pub mod pipeline;
pub mod translation;
pub mod tts;
