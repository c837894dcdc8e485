use serde_json::Value;

pub fn assert_language_entries(entries: &Value) {
    let entries = entries.as_array().expect("Expected an array of languages");
    assert!(!entries.is_empty(), "Language list is empty");
    for entry in entries {
        assert!(entry.get("code").and_then(|v| v.as_str()).is_some(), "Missing code");
        assert!(entry.get("name").and_then(|v| v.as_str()).is_some(), "Missing name");
    }
}

pub fn assert_speech_response(body: &Value) {
    assert_eq!(body.get("state").and_then(|v| v.as_str()), Some("done"));
    for field in ["text", "language", "language_name", "accent", "audio_base64"] {
        assert!(
            body.get(field).and_then(|v| v.as_str()).is_some(),
            "Missing {} field",
            field
        );
    }
    assert!(body.get("size_kb").and_then(|v| v.as_f64()).is_some());
    assert!(body.get("duration_seconds").and_then(|v| v.as_f64()).is_some());
    assert!(body.get("warnings").and_then(|v| v.as_array()).is_some());

    let download = body.get("download").expect("Missing download link");
    assert_eq!(
        download.get("filename").and_then(|v| v.as_str()),
        Some("audio.mp3")
    );
    assert!(download
        .get("href")
        .and_then(|v| v.as_str())
        .is_some_and(|href| href.starts_with("data:audio/mp3;base64,")));
}
