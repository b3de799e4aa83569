//! Integration tests for `GeminiClient` using wiremock HTTP mocks.

use chrono::Utc;
use rewind_core::{AssistantError, RankingAssistant, RankingRequest, Store};
use rewind_gemini::{GeminiClient, GeminiError, DEFAULT_MODEL};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-pro:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url("test-key", DEFAULT_MODEL, 30, base_url)
        .expect("client construction should not fail")
}

fn store(name: &str) -> Store {
    Store {
        id: Uuid::new_v4(),
        name: name.to_string(),
        url: format!("https://{}.example", name.to_lowercase()),
        description: String::new(),
        decades: vec!["1990s".to_string()],
        style_tags: vec!["grunge".to_string()],
        is_small_business: false,
        rating: 4.2,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn request() -> RankingRequest {
    RankingRequest {
        decade: "1990s".to_string(),
        style_tags: vec!["Grunge".to_string()],
        candidate_stores: vec![store("Depop"), store("Zara")],
    }
}

fn candidate_envelope(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] }, "finishReason": "STOP" }
        ],
        "usageMetadata": { "totalTokenCount": 321 }
    })
}

#[tokio::test]
async fn rank_returns_parsed_ranking() {
    let server = MockServer::start().await;
    let text = r#"{"rankedExisting":[{"name":"Depop","reason":"Authentic 90s","score":95}],"extraSuggestions":[]}"#;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_envelope(text)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ranking = client.rank(&request()).await.expect("should parse ranking");

    assert_eq!(ranking.ranked_existing.len(), 1);
    assert_eq!(ranking.ranked_existing[0].name, "Depop");
    assert_eq!(ranking.ranked_existing[0].score, 95);
    assert!(ranking.extra_suggestions.is_empty());
}

#[tokio::test]
async fn prompt_is_sent_as_single_user_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_envelope("ok")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let text = client
        .generate_content("hello there")
        .await
        .expect("should return text");
    assert_eq!(text, "ok");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).expect("json body");
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "hello there");
}

#[tokio::test]
async fn unparseable_text_is_output_error_with_raw() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_envelope("Sure! Here you go.")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.rank(&request()).await.unwrap_err();

    match err {
        AssistantError::Output { raw, .. } => assert_eq!(raw, "Sure! Here you go."),
        other => panic!("expected Output, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.rank_stores(&request()).await.unwrap_err();
    assert!(
        matches!(err, GeminiError::Status { status: 403, ref body } if body.contains("API key")),
        "unexpected error: {err:?}"
    );

    let err = client.rank(&request()).await.unwrap_err();
    assert!(matches!(err, AssistantError::Transport(_)));
}

#[tokio::test]
async fn empty_candidates_are_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.rank_stores(&request()).await.unwrap_err();
    assert!(matches!(err, GeminiError::EmptyResponse));
}

#[tokio::test]
async fn custom_model_changes_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_envelope("x")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", "gemini-1.5-flash", 30, &server.uri())
        .expect("client");
    assert_eq!(client.model(), "gemini-1.5-flash");
    client.generate_content("p").await.expect("text");
}
