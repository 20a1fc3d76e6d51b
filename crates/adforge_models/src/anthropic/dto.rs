//! Anthropic Messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Base64 image source for an image content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicImageSource {
    /// Source kind, always "base64"
    #[serde(rename = "type")]
    source_type: String,
    /// MIME type of the image
    media_type: String,
    /// Base64 payload
    data: String,
}

impl AnthropicImageSource {
    /// Create a base64 image source.
    pub fn base64(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// A content block in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnthropicContentBlock {
    /// Plain text block
    Text {
        /// The text content
        text: String,
    },
    /// Base64 image block
    Image {
        /// Image source
        source: AnthropicImageSource,
    },
}

/// A message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicMessage {
    /// Message role ("user" or "assistant")
    role: String,
    /// Content blocks
    content: Vec<AnthropicContentBlock>,
}

impl AnthropicMessage {
    /// Creates a new builder for `AnthropicMessage`.
    pub fn builder() -> AnthropicMessageBuilder {
        AnthropicMessageBuilder::default()
    }
}

/// Messages API request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// System prompt
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Conversation messages
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// A content block in the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponseBlock {
    /// Block kind ("text", "tool_use", ...)
    #[serde(rename = "type")]
    block_type: String,
    /// Text content, present on text blocks
    #[serde(default)]
    text: Option<String>,
}

/// Messages API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Response identifier
    id: String,
    /// Generated content blocks
    content: Vec<AnthropicResponseBlock>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
}

impl AnthropicResponse {
    /// The first text block's content, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_messages_api_shape() {
        let request = AnthropicRequest::builder()
            .model("claude-sonnet-4-6")
            .max_tokens(4096u32)
            .system(Some("You are a creative director.".to_string()))
            .messages(vec![
                AnthropicMessage::builder()
                    .role("user")
                    .content(vec![
                        AnthropicContentBlock::Text {
                            text: "[Brand Logo]:".to_string(),
                        },
                        AnthropicContentBlock::Image {
                            source: AnthropicImageSource::base64("image/png", "iVBOR"),
                        },
                    ])
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-6");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image");
        assert_eq!(json["messages"][0]["content"][1]["source"]["type"], "base64");
        assert_eq!(
            json["messages"][0]["content"][1]["source"]["media_type"],
            "image/png"
        );
        // temperature was not set and must not appear
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn response_first_text_skips_non_text_blocks() {
        let body = r#"{
            "id": "msg_01",
            "content": [
                {"type": "thinking"},
                {"type": "text", "text": "{\"hooks\": []}"}
            ],
            "stop_reason": "end_turn"
        }"#;
        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text(), Some("{\"hooks\": []}"));
    }
}
