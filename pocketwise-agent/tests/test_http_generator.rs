use pocketwise_agent::{GenerationError, HttpGenerator, LlmConfig, Provider, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generator(provider: Provider, server: &MockServer) -> HttpGenerator {
    HttpGenerator::new(
        LlmConfig::new(provider, "test-key")
            .with_model("test-model")
            .with_base_url(server.uri()),
    )
}

#[tokio::test]
async fn test_openai_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "  Save a little every week.  " } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator(Provider::OpenAI, &server).generate("hi").await.unwrap();
    assert_eq!(text, "Save a little every week.");
}

#[tokio::test]
async fn test_openai_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = generator(Provider::OpenAI, &server).generate("hi").await.unwrap_err();
    match err {
        GenerationError::Status { status, body, provider } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
            assert_eq!(provider, "openai");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_openai_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = generator(Provider::OpenAI, &server).generate("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn test_anthropic_success_joins_text_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                { "type": "text", "text": "Try a " },
                { "type": "tool_use", "id": "x" },
                { "type": "text", "text": "50/30/20 split." }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = generator(Provider::Anthropic, &server).generate("hi").await.unwrap();
    assert_eq!(text, "Try a 50/30/20 split.");
}
