use super::translation_repository::TranslationRepository;
use async_trait::async_trait;
use serde_json::Value;

pub const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate (public `gtx` client) implementation of the translation repository
pub struct GoogleTranslateRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateRepository {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// The response is a nested array; element 0 lists `[translated, original, ...]`
    /// segments which concatenate into the full translation
    fn parse_translation(body: &Value) -> Result<String, String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| "Malformed translation response: missing segments".to_string())?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.trim().is_empty() {
            return Err("Translation provider returned an empty translation".to_string());
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslateRepository {
    async fn translate(&self, source: &str, target: &str, text: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            source = source,
            target = target,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling Google Translate"
        );

        let response = self
            .http_client
            .post(&self.base_url)
            .query(&[("client", "gtx"), ("sl", source), ("tl", target), ("dt", "t")])
            .form(&[("q", text)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, source = source, target = target, "Google Translate request failed");
                format!("Translation request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status.as_u16(),
                source = source,
                target = target,
                "Google Translate rejected the request"
            );
            return Err(format!(
                "Translation provider returned {}: {}",
                status.as_u16(),
                error_text.chars().take(200).collect::<String>()
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse translation response: {}", e))?;
        let translated = Self::parse_translation(&body)?;

        tracing::info!(
            provider = "google",
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated.len(),
            "Translation completed"
        );

        Ok(translated)
    }
}
