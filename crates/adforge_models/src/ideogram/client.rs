use crate::ideogram::{IdeogramImageRequest, IdeogramRequest, IdeogramResponse};
use adforge_core::{GeneratedImage, ImageProvider, ImageRequest};
use adforge_error::{IdeogramErrorKind, ModelsError};
use adforge_interface::ImageDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const IDEOGRAM_API_URL: &str = "https://api.ideogram.ai";

/// Translate an aspect-ratio string into Ideogram's aspect constant.
///
/// Unknown ratios fall back to square.
fn aspect_constant(aspect_ratio: &str) -> &'static str {
    match aspect_ratio {
        "1:1" => "ASPECT_1_1",
        "1.91:1" => "ASPECT_16_9",
        "4:5" => "ASPECT_4_5",
        "9:16" => "ASPECT_9_16",
        "16:9" => "ASPECT_16_9",
        "2:3" => "ASPECT_2_3",
        "3:2" => "ASPECT_3_2",
        _ => "ASPECT_1_1",
    }
}

/// Ideogram API client.
#[derive(Debug, Clone)]
pub struct IdeogramClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IdeogramClient {
    /// Creates a new Ideogram client.
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Ideogram client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: IDEOGRAM_API_URL.to_string(),
        }
    }

    /// Creates a client from the `IDEOGRAM_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("IDEOGRAM_API_KEY").map_err(|_| {
            ModelsError::new(
                IdeogramErrorKind::Http("IDEOGRAM_API_KEY environment variable not set".into())
                    .into(),
            )
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL (used by wire tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Converts a normalized image request into the Ideogram wire shape.
    fn convert_request(request: &ImageRequest) -> Result<IdeogramRequest, ModelsError> {
        let negative_prompt = if request.negative_prompt().is_empty() {
            None
        } else {
            Some(request.negative_prompt().clone())
        };

        let inner = IdeogramImageRequest::builder()
            .prompt(request.prompt().clone())
            .negative_prompt(negative_prompt)
            .aspect_ratio(aspect_constant(request.aspect_ratio()))
            .build()
            .map_err(|e| ModelsError::new(IdeogramErrorKind::Builder(e.to_string()).into()))?;

        Ok(IdeogramRequest::new(inner))
    }

    /// Sends a request to the Ideogram generate endpoint.
    #[instrument(skip(self, request))]
    pub async fn generate_ideogram(
        &self,
        request: &IdeogramRequest,
    ) -> Result<IdeogramResponse, ModelsError> {
        debug!("Sending request to Ideogram API");

        let response = self
            .client
            .post(format!("{}/generate", self.base_url))
            .header("Api-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Ideogram API");
                ModelsError::new(IdeogramErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Ideogram API returned error");
            return Err(ModelsError::new(
                IdeogramErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Ideogram response");
            ModelsError::new(
                IdeogramErrorKind::Parse(format!("Failed to parse response: {}", e)).into(),
            )
        })
    }
}

#[async_trait::async_trait]
impl ImageDriver for IdeogramClient {
    fn provider(&self) -> ImageProvider {
        ImageProvider::Ideogram
    }

    #[instrument(skip(self, request), fields(aspect = %request.aspect_ratio()))]
    async fn render(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, adforge_error::AdforgeError> {
        let ideogram_request = Self::convert_request(request)?;
        let ideogram_response = self.generate_ideogram(&ideogram_request).await?;

        let url = ideogram_response
            .first_url()
            .ok_or_else(|| ModelsError::new(IdeogramErrorKind::MissingUrl.into()))?;

        debug!(url = %url, "Ideogram image generated");
        Ok(GeneratedImage::new(ImageProvider::Ideogram, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_constants_match_supported_ratios() {
        assert_eq!(aspect_constant("1:1"), "ASPECT_1_1");
        assert_eq!(aspect_constant("1.91:1"), "ASPECT_16_9");
        assert_eq!(aspect_constant("4:5"), "ASPECT_4_5");
        assert_eq!(aspect_constant("9:16"), "ASPECT_9_16");
        assert_eq!(aspect_constant("3:2"), "ASPECT_3_2");
        // unknown ratios fall back to square
        assert_eq!(aspect_constant("7:3"), "ASPECT_1_1");
    }

    #[test]
    fn convert_request_drops_empty_negative_prompt() {
        let request = ImageRequest::builder()
            .prompt("a mug")
            .aspect_ratio("4:5")
            .build()
            .unwrap();

        let converted = IdeogramClient::convert_request(&request).unwrap();
        assert_eq!(converted.image_request().negative_prompt(), &None);
        assert_eq!(converted.image_request().aspect_ratio(), "ASPECT_4_5");
    }
}
