//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// The system prompt travels in its own field rather than as a system-role
/// message, matching the providers that take it as a top-level parameter.
///
/// # Examples
///
/// ```
/// use adforge_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest {
///     messages: vec![Message::user_text("Hello!")],
///     system: Some("You are a creative director.".to_string()),
///     max_tokens: Some(4096),
///     temperature: Some(0.7),
///     model: None,
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(4096));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// System prompt establishing the persona
    pub system: Option<String>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// A single generated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use adforge_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("{\"hooks\": []}".to_string())],
/// };
///
/// assert_eq!(response.text(), "{\"hooks\": []}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenate all text outputs into a single string.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .map(|o| match o {
                Output::Text(text) => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("")
    }
}
