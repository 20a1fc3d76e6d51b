//! Live Anthropic API tests, run with `--features api`.

use adforge_core::{GenerateRequest, Message};
use adforge_interface::CreativeDriver;
use adforge_models::AnthropicClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn anthropic_simple_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = AnthropicClient::from_env()?;

    let request = GenerateRequest {
        messages: vec![Message::user_text("Say 'test' and nothing else.")],
        max_tokens: Some(32),
        ..Default::default()
    };

    let response = client.generate(&request).await?;
    assert!(!response.text().is_empty());
    println!("Response: {}", response.text());

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn anthropic_honors_system_field() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let client = AnthropicClient::from_env()?;

    let request = GenerateRequest {
        messages: vec![Message::user_text("What word were you told to say?")],
        system: Some("Always answer with the single word 'apricot'.".to_string()),
        max_tokens: Some(32),
        ..Default::default()
    };

    let response = client.generate(&request).await?;
    assert!(response.text().to_lowercase().contains("apricot"));

    Ok(())
}
