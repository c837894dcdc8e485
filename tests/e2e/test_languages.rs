use crate::e2e::helpers;

use helpers::{assertions::assert_language_entries, TestContext};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_translation_languages_with_auto_first(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_language_entries(&body["translation"]);

    let translation = body["translation"].as_array().unwrap();
    assert_eq!(translation[0]["code"], "auto");
    assert!(translation.iter().any(|l| l["code"] == "zh-cn"));
    assert!(translation.iter().any(|l| l["code"] == "fr"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_synthesis_languages_from_provider(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["synthesis_from_provider"], true);
    assert_language_entries(&body["synthesis"]);

    // Sorted by display name
    let names: Vec<&str> = body["synthesis"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Chinese (Simplified)", "English", "French", "German"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_built_in_synthesis_languages(ctx: &TestContext) {
    ctx.tts.fail_catalog_with("timed out");

    let response = ctx.client.get("/api/languages").await.unwrap();

    // A failed lookup never fails the request
    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["synthesis_from_provider"], false);

    let synthesis = body["synthesis"].as_array().unwrap();
    assert_eq!(synthesis.len(), 12);
    assert!(synthesis.iter().any(|l| l["code"] == "ja"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_english_accents(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let codes: Vec<&str> = response.body.as_ref().unwrap()["accents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["com", "co.uk", "ca", "com.au", "co.in"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_the_form_page(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response
        .header("content-type")
        .is_some_and(|v| v.starts_with("text/html")));

    let html = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert!(html.contains("/api/speech"));
}
