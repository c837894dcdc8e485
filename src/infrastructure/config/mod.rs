use serde::Deserialize;
use std::env;

use crate::domain::pipeline::MAX_TEXT_CHARS;
use crate::infrastructure::repositories::google_translate_repository::GOOGLE_TRANSLATE_URL;
use crate::infrastructure::repositories::google_tts_repository::GOOGLE_TTS_HOST_PREFIX;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Providers
    pub translate_api_url: String,
    pub tts_host_prefix: String,
    // Language catalog cache
    pub language_cache_enabled: bool,
    pub max_text_chars: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            translate_api_url: env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| GOOGLE_TRANSLATE_URL.to_string()),
            tts_host_prefix: env::var("TTS_HOST_PREFIX")
                .unwrap_or_else(|_| GOOGLE_TTS_HOST_PREFIX.to_string()),
            language_cache_enabled: env::var("LANGUAGE_CACHE_ENABLED")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(true),
            max_text_chars: env::var("MAX_TEXT_CHARS")
                .unwrap_or_else(|_| MAX_TEXT_CHARS.to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
