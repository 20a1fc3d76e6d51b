//! Wire-level tests for the Anthropic client against a mock server.

use adforge_core::{GenerateRequest, Message};
use adforge_interface::CreativeDriver;
use adforge_models::AnthropicClient;

fn request() -> GenerateRequest {
    GenerateRequest {
        messages: vec![Message::user_text("Generate the package.")],
        system: Some("You are a creative director.".to_string()),
        max_tokens: Some(1024),
        temperature: None,
        model: None,
    }
}

#[tokio::test]
async fn generate_returns_first_text_block() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_header("anthropic-version", "2023-06-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "msg_01", "content": [{"type": "text", "text": "{\"ok\": true}"}], "stop_reason": "end_turn"}"#,
        )
        .create_async()
        .await;

    let client = AnthropicClient::new("test-key", "claude-sonnet-4-6").with_base_url(server.url());
    let response = client.generate(&request()).await.unwrap();

    assert_eq!(response.text(), "{\"ok\": true}");
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_surfaces_api_errors_with_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(529)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = AnthropicClient::new("test-key", "claude-sonnet-4-6").with_base_url(server.url());
    let err = client.generate(&request()).await.unwrap_err();

    let rendered = format!("{}", err);
    assert!(rendered.contains("529"), "missing status in: {}", rendered);
    assert!(rendered.contains("overloaded"), "missing body in: {}", rendered);
}

#[tokio::test]
async fn generate_errors_when_response_has_no_text() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "msg_01", "content": []}"#)
        .create_async()
        .await;

    let client = AnthropicClient::new("test-key", "claude-sonnet-4-6").with_base_url(server.url());
    assert!(client.generate(&request()).await.is_err());
}
