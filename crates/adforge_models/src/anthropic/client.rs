use crate::anthropic::{
    AnthropicContentBlock, AnthropicImageSource, AnthropicMessage, AnthropicRequest,
    AnthropicResponse,
};
use adforge_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};
use adforge_error::{AnthropicErrorKind, ModelsError};
use adforge_interface::CreativeDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Anthropic Messages API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Anthropic API key
    /// * `model` - Model identifier (e.g., "claude-sonnet-4-6")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Anthropic client");
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: ANTHROPIC_API_URL.to_string(),
        }
    }

    /// Creates a client from the `ANTHROPIC_API_KEY` environment variable
    /// with the default model.
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            ModelsError::new(
                AnthropicErrorKind::Http("ANTHROPIC_API_KEY environment variable not set".into())
                    .into(),
            )
        })?;
        Ok(Self::new(api_key, DEFAULT_MODEL))
    }

    /// Override the API base URL (used by wire tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a request to the Anthropic Messages API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn generate_anthropic(
        &self,
        request: &AnthropicRequest,
    ) -> Result<AnthropicResponse, ModelsError> {
        debug!("Sending request to Anthropic API");

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Anthropic API");
                ModelsError::new(AnthropicErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Anthropic API returned error");
            return Err(ModelsError::new(
                AnthropicErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        let anthropic_response: AnthropicResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Anthropic response");
            ModelsError::new(
                AnthropicErrorKind::Parse(format!("Failed to parse response: {}", e)).into(),
            )
        })?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a generic GenerateRequest to an Anthropic API request.
    fn convert_request(&self, request: &GenerateRequest) -> Result<AnthropicRequest, ModelsError> {
        let messages: Result<Vec<AnthropicMessage>, ModelsError> = request
            .messages
            .iter()
            .map(|msg| {
                let content: Vec<AnthropicContentBlock> = msg
                    .content
                    .iter()
                    .filter_map(|input| match input {
                        Input::Text(text) => {
                            Some(AnthropicContentBlock::Text { text: text.clone() })
                        }
                        Input::Image {
                            mime,
                            source: MediaSource::Base64(data),
                        } => Some(AnthropicContentBlock::Image {
                            source: AnthropicImageSource::base64(
                                mime.as_deref().unwrap_or("image/jpeg"),
                                data.clone(),
                            ),
                        }),
                        Input::Image {
                            source: MediaSource::Url(_),
                            ..
                        } => {
                            debug!("Skipping URL image input (base64 sources only)");
                            None
                        }
                    })
                    .collect();

                if content.is_empty() {
                    return Err(ModelsError::new(
                        AnthropicErrorKind::ConversionError(
                            "Message must have at least one convertible content block".to_string(),
                        )
                        .into(),
                    ));
                }

                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                    Role::System => {
                        return Err(ModelsError::new(
                            AnthropicErrorKind::ConversionError(
                                "System role not supported in messages (use the system field)"
                                    .to_string(),
                            )
                            .into(),
                        ));
                    }
                };

                AnthropicMessage::builder()
                    .role(role)
                    .content(content)
                    .build()
                    .map_err(|e| {
                        ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into())
                    })
            })
            .collect();

        let messages = messages?;

        let mut builder = AnthropicRequest::builder();
        builder
            .model(request.model.as_deref().unwrap_or(&self.model))
            .max_tokens(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
            .system(request.system.clone())
            .messages(messages);

        if let Some(temp) = request.temperature {
            builder.temperature(Some(temp));
        }

        builder
            .build()
            .map_err(|e| ModelsError::new(AnthropicErrorKind::Builder(e.to_string()).into()))
    }

    /// Converts an Anthropic API response to a generic GenerateResponse.
    fn convert_response(response: &AnthropicResponse) -> Result<GenerateResponse, ModelsError> {
        let text = response.first_text().ok_or_else(|| {
            ModelsError::new(AnthropicErrorKind::MissingText.into())
        })?;

        Ok(GenerateResponse {
            outputs: vec![Output::Text(text.to_string())],
        })
    }
}

#[async_trait::async_trait]
impl CreativeDriver for AnthropicClient {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, adforge_error::AdforgeError> {
        debug!("Generating response with Anthropic");

        let anthropic_request = self.convert_request(request)?;
        let anthropic_response = self.generate_anthropic(&anthropic_request).await?;
        let response = Self::convert_response(&anthropic_response)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::Message;
    use adforge_error::ModelsErrorKind;

    fn client() -> AnthropicClient {
        AnthropicClient::new("test-key", DEFAULT_MODEL)
    }

    #[test]
    fn convert_request_maps_text_and_base64_images() {
        let request = GenerateRequest {
            messages: vec![Message {
                role: Role::User,
                content: vec![
                    Input::Text("[Brand Logo]:".to_string()),
                    Input::Image {
                        mime: Some("image/png".to_string()),
                        source: MediaSource::Base64("iVBOR".to_string()),
                    },
                    Input::Text("Generate the package.".to_string()),
                ],
            }],
            system: Some("persona".to_string()),
            max_tokens: None,
            temperature: Some(0.7),
            model: None,
        };

        let converted = client().convert_request(&request).unwrap();
        assert_eq!(converted.messages().len(), 1);
        assert_eq!(converted.messages()[0].content().len(), 3);
        assert_eq!(*converted.max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(converted.system().as_deref(), Some("persona"));
        assert_eq!(converted.temperature(), &Some(0.7));
    }

    #[test]
    fn convert_request_rejects_system_role_messages() {
        let request = GenerateRequest {
            messages: vec![Message {
                role: Role::System,
                content: vec![Input::Text("persona".to_string())],
            }],
            ..Default::default()
        };

        let err = client().convert_request(&request).unwrap_err();
        assert!(matches!(err.kind, ModelsErrorKind::Anthropic(_)));
    }

    #[test]
    fn convert_request_rejects_messages_with_no_convertible_content() {
        let request = GenerateRequest {
            messages: vec![Message {
                role: Role::User,
                content: vec![Input::Image {
                    mime: None,
                    source: MediaSource::Url("https://example.com/a.png".to_string()),
                }],
            }],
            ..Default::default()
        };

        assert!(client().convert_request(&request).is_err());
    }

    #[test]
    fn convert_response_takes_first_text_block() {
        let body = r#"{"id": "msg_01", "content": [{"type": "text", "text": "hello"}]}"#;
        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        let converted = AnthropicClient::convert_response(&response).unwrap();
        assert_eq!(converted.text(), "hello");
    }

    #[test]
    fn convert_response_errors_without_text() {
        let body = r#"{"id": "msg_01", "content": []}"#;
        let response: AnthropicResponse = serde_json::from_str(body).unwrap();
        assert!(AnthropicClient::convert_response(&response).is_err());
    }
}
