use super::tts_repository::TtsRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use regex::Regex;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::domain::language::catalog::to_map;

/// Google Translate TTS accepts at most 100 characters per request
const MAX_CHUNK_SIZE: usize = 100;

/// RPC id of the speech endpoint behind translate.google.*
const TTS_RPC_ID: &str = "jQ1olc";

pub const GOOGLE_TTS_HOST_PREFIX: &str = "https://translate.google.";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Languages spoken by Google Translate TTS
pub const GOOGLE_TTS_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-CA", "French (Canada)"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("ha", "Hausa"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("iw", "Hebrew"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi (Gurmukhi)"),
    ("pl", "Polish"),
    ("pt", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("su", "Sundanese"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Filipino"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("yue", "Cantonese"),
    ("zh", "Chinese (Mandarin)"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

static CLAUSE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?;:,\u{3001}\u{3002}\u{FF01}\u{FF0C}\u{FF1F}]+\s*").unwrap()
});

/// Google Translate TTS implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    host_prefix: String,
}

impl GoogleTtsRepository {
    pub fn new(http_client: reqwest::Client, host_prefix: String) -> Self {
        Self {
            http_client,
            host_prefix,
        }
    }

    /// The accent is chosen by which regional Google host serves the request
    fn endpoint(&self, tld: &str) -> String {
        format!(
            "{}{}/_/TranslateWebserverUi/data/batchexecute",
            self.host_prefix, tld
        )
    }

    /// Split text into chunks that respect clause boundaries
    /// Each chunk is at most MAX_CHUNK_SIZE characters
    fn split_into_chunks(text: &str) -> Vec<String> {
        let text = text.trim();
        let mut chunks = if text.chars().count() <= MAX_CHUNK_SIZE {
            vec![text.to_string()]
        } else {
            Self::split_long_text(text)
        };

        // Punctuation-only chunks produce no speech and make the provider choke
        chunks.retain(|chunk| chunk.chars().any(char::is_alphanumeric));
        chunks
    }

    fn split_long_text(text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current_chunk = String::new();
        let mut last_end = 0;

        for mat in CLAUSE_BOUNDARY.find_iter(text) {
            Self::push_clause(&mut chunks, &mut current_chunk, &text[last_end..mat.end()]);
            last_end = mat.end();
        }

        // Handle remaining text after last clause boundary
        if last_end < text.len() {
            Self::push_clause(&mut chunks, &mut current_chunk, &text[last_end..]);
        }

        Self::flush(&mut chunks, &mut current_chunk);
        chunks
    }

    fn push_clause(chunks: &mut Vec<String>, current_chunk: &mut String, clause: &str) {
        let clause_len = clause.chars().count();

        // Clause too long on its own: fall back to word boundaries
        if clause_len > MAX_CHUNK_SIZE {
            Self::flush(chunks, current_chunk);
            for word in clause.split_whitespace() {
                let word_len = word.chars().count();
                if word_len > MAX_CHUNK_SIZE {
                    Self::flush(chunks, current_chunk);
                    let chars: Vec<char> = word.chars().collect();
                    for piece in chars.chunks(MAX_CHUNK_SIZE) {
                        chunks.push(piece.iter().collect());
                    }
                    continue;
                }
                if !current_chunk.is_empty()
                    && current_chunk.chars().count() + 1 + word_len > MAX_CHUNK_SIZE
                {
                    Self::flush(chunks, current_chunk);
                }
                if !current_chunk.is_empty() {
                    current_chunk.push(' ');
                }
                current_chunk.push_str(word);
            }
            return;
        }

        // One extra character for the separator a word-split clause leaves off
        if !current_chunk.is_empty()
            && current_chunk.chars().count() + 1 + clause_len > MAX_CHUNK_SIZE
        {
            Self::flush(chunks, current_chunk);
        }
        if current_chunk.ends_with(|c: char| !c.is_whitespace()) {
            current_chunk.push(' ');
        }
        current_chunk.push_str(clause);
    }

    fn flush(chunks: &mut Vec<String>, current_chunk: &mut String) {
        let trimmed = current_chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        current_chunk.clear();
    }

    /// Form body for the batchexecute RPC: a JSON-encoded parameter list
    /// wrapped in a JSON-encoded envelope, then URL-encoded as `f.req`
    fn build_request_body(text: &str, language: &str, slow: bool) -> Result<String, String> {
        let speed = if slow { Value::Bool(true) } else { Value::Null };
        let parameter = serde_json::to_string(&json!([text, language, speed, "null"]))
            .map_err(|e| format!("Failed to encode TTS parameters: {}", e))?;
        let rpc = serde_json::to_string(&json!([[[TTS_RPC_ID, parameter, null, "generic"]]]))
            .map_err(|e| format!("Failed to encode TTS request: {}", e))?;
        Ok(format!("f.req={}&", urlencoding::encode(&rpc)))
    }

    /// Find the RPC line in the response and decode its base64 audio payload
    fn extract_audio(body: &str) -> Result<Vec<u8>, String> {
        for line in body.lines().filter(|line| line.contains(TTS_RPC_ID)) {
            let Ok(envelope) = serde_json::from_str::<Value>(line) else {
                continue;
            };

            let payload = envelope
                .get(0)
                .and_then(|rpc| rpc.get(2))
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    "No audio in TTS response (the language may not be supported)".to_string()
                })?;

            let inner: Value = serde_json::from_str(payload)
                .map_err(|e| format!("Malformed TTS payload: {}", e))?;
            let audio_base64 = inner
                .get(0)
                .and_then(Value::as_str)
                .ok_or_else(|| "Malformed TTS payload: missing audio".to_string())?;

            return BASE64
                .decode(audio_base64)
                .map_err(|e| format!("Failed to decode TTS audio: {}", e));
        }

        Err("No audio in TTS response (the language may not be supported)".to_string())
    }

    /// Call Google TTS to synthesize a single text chunk
    async fn call_google(
        &self,
        text: &str,
        language: &str,
        slow: bool,
        tld: &str,
    ) -> Result<Vec<u8>, String> {
        let endpoint = self.endpoint(tld);
        tracing::debug!(
            endpoint = %endpoint,
            language = language,
            slow = slow,
            text_length = text.len(),
            "Calling Google TTS"
        );

        let body = Self::build_request_body(text, language, slow)?;
        let response = self
            .http_client
            .post(&endpoint)
            .header("Referer", format!("https://translate.google.{}/", tld))
            .header("User-Agent", USER_AGENT)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded;charset=utf-8",
            )
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    language = language,
                    tld = tld,
                    text_length = text.len(),
                    "Google TTS request failed"
                );
                format!("Failed to connect to the TTS provider: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status.as_u16(), language = language, "Google TTS rejected the request");
            return Err(format!(
                "TTS provider returned {} (language: {}, host: translate.google.{})",
                status.as_u16(),
                language,
                tld
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read TTS response: {}", e))?;
        let audio_bytes = Self::extract_audio(&body)?;

        tracing::debug!(audio_size = audio_bytes.len(), "Google TTS chunk received");
        Ok(audio_bytes)
    }

    /// Synthesize multiple text chunks and merge the audio results in order
    async fn synthesize_chunks(
        &self,
        chunks: &[String],
        language: &str,
        slow: bool,
        tld: &str,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            let audio_data = self.call_google(chunk, language, slow, tld).await?;
            merged_audio.extend(audio_data);

            tracing::debug!(
                chunk_index = index,
                total_audio_size = merged_audio.len(),
                "Chunk synthesized and merged"
            );
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &str,
        slow: bool,
        tld: &str,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let chunks = Self::split_into_chunks(text);
        if chunks.is_empty() || chunks.iter().all(|c| c.is_empty()) {
            return Err("No speakable text to synthesize".to_string());
        }
        tracing::info!(
            chunk_count = chunks.len(),
            text_length = text.len(),
            "Text split into chunks"
        );

        let audio_data = self.synthesize_chunks(&chunks, language, slow, tld).await?;

        tracing::info!(
            provider = "google",
            language = language,
            tld = tld,
            slow = slow,
            latency_ms = start_time.elapsed().as_millis(),
            chunk_count = chunks.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }

    async fn supported_languages(&self) -> Result<BTreeMap<String, String>, String> {
        Ok(to_map(GOOGLE_TTS_LANGUAGES))
    }
}
