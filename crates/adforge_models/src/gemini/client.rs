use crate::gemini::{GeminiGenerateRequest, GeminiGenerateResponse, GeminiInlineData, GeminiPart};
use adforge_core::{DataUrl, GeneratedImage, ImageProvider, ImageRequest};
use adforge_error::{GeminiImageErrorKind, ModelsError};
use adforge_interface::ImageDriver;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp-image-generation";
const X_GOOG_API_KEY: &str = "x-goog-api-key";

/// Gemini image generation client.
#[derive(Debug, Clone)]
pub struct GeminiImageClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiImageClient {
    /// Creates a new Gemini image client.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        debug!("Creating new Gemini image client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Creates a client from the `GOOGLE_AI_API_KEY` environment variable
    /// with the default image model.
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("GOOGLE_AI_API_KEY").map_err(|_| {
            ModelsError::new(
                GeminiImageErrorKind::Http(
                    "GOOGLE_AI_API_KEY environment variable not set".into(),
                )
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

    /// Fold prompt, negative prompt, and aspect-ratio hint into one text part.
    ///
    /// The endpoint has no dedicated fields for either, so they ride in the
    /// prompt text.
    fn full_prompt(request: &ImageRequest) -> String {
        let mut prompt = request.prompt().clone();
        if !request.negative_prompt().is_empty() {
            prompt.push_str("\n\nAvoid: ");
            prompt.push_str(request.negative_prompt());
        }
        prompt.push_str("\n\nTarget aspect ratio: ");
        prompt.push_str(request.aspect_ratio());
        prompt
    }

    /// Converts a normalized image request into the Gemini wire shape.
    fn convert_request(request: &ImageRequest) -> GeminiGenerateRequest {
        let mut parts = Vec::new();

        if let Some(reference) = request.reference_image().as_deref() {
            match DataUrl::parse(reference) {
                Some(parsed) => {
                    parts.push(GeminiPart::inline(GeminiInlineData::new(
                        parsed.mime().clone(),
                        parsed.data().clone(),
                    )));
                }
                None => {
                    warn!("Reference image is not a base64 data URL, skipping");
                }
            }
        }

        parts.push(GeminiPart::text(Self::full_prompt(request)));
        GeminiGenerateRequest::image_request(parts)
    }

    /// Sends a generateContent request to the Gemini API.
    #[instrument(skip(self, request), fields(model = %self.model))]
    pub async fn generate_gemini(
        &self,
        request: &GeminiGenerateRequest,
    ) -> Result<GeminiGenerateResponse, ModelsError> {
        debug!("Sending request to Gemini API");

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(url)
            .header(X_GOOG_API_KEY, &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                ModelsError::new(
                    GeminiImageErrorKind::Http(format!("Request failed: {}", e)).into(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(ModelsError::new(
                GeminiImageErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            ModelsError::new(
                GeminiImageErrorKind::Parse(format!("Failed to parse response: {}", e)).into(),
            )
        })
    }
}

#[async_trait::async_trait]
impl ImageDriver for GeminiImageClient {
    fn provider(&self) -> ImageProvider {
        ImageProvider::Gemini
    }

    fn supports_reference_images(&self) -> bool {
        true
    }

    #[instrument(skip(self, request), fields(aspect = %request.aspect_ratio()))]
    async fn render(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, adforge_error::AdforgeError> {
        let gemini_request = Self::convert_request(request);
        let gemini_response = self.generate_gemini(&gemini_request).await?;

        let inline = gemini_response
            .first_inline_data()
            .ok_or_else(|| ModelsError::new(GeminiImageErrorKind::NoImage.into()))?;

        let url = DataUrl::new(inline.mime_type().clone(), inline.data().clone()).format();
        debug!(mime = %inline.mime_type(), "Gemini image generated");
        Ok(GeneratedImage::new(ImageProvider::Gemini, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_prompt_folds_negative_and_aspect() {
        let request = ImageRequest::builder()
            .prompt("a mug")
            .negative_prompt("stock photos")
            .aspect_ratio("4:5")
            .build()
            .unwrap();

        let prompt = GeminiImageClient::full_prompt(&request);
        assert!(prompt.starts_with("a mug"));
        assert!(prompt.contains("\n\nAvoid: stock photos"));
        assert!(prompt.ends_with("Target aspect ratio: 4:5"));
    }

    #[test]
    fn full_prompt_skips_empty_negative() {
        let request = ImageRequest::builder()
            .prompt("a mug")
            .aspect_ratio("1:1")
            .build()
            .unwrap();

        let prompt = GeminiImageClient::full_prompt(&request);
        assert!(!prompt.contains("Avoid:"));
    }

    #[test]
    fn convert_request_leads_with_reference_image() {
        let request = ImageRequest::builder()
            .prompt("a mug")
            .aspect_ratio("1:1")
            .reference_image(Some("data:image/jpeg;base64,abc".to_string()))
            .build()
            .unwrap();

        let converted = GeminiImageClient::convert_request(&request);
        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["inlineData"]["data"], "abc");
        assert!(json["contents"][0]["parts"][1]["text"].is_string());
    }

    #[test]
    fn convert_request_skips_non_data_url_reference() {
        let request = ImageRequest::builder()
            .prompt("a mug")
            .aspect_ratio("1:1")
            .reference_image(Some("https://example.com/ref.png".to_string()))
            .build()
            .unwrap();

        let converted = GeminiImageClient::convert_request(&request);
        let json = serde_json::to_value(&converted).unwrap();
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 1);
    }
}
