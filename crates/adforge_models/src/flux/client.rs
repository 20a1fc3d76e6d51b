use crate::flux::{FluxImageToImageRequest, FluxResponse, FluxTextToImageRequest};
use adforge_core::{GeneratedImage, ImageProvider, ImageRequest};
use adforge_error::{FluxErrorKind, ModelsError};
use adforge_interface::ImageDriver;
use reqwest::Client;
use tracing::{debug, error, instrument};

const FAL_API_URL: &str = "https://fal.run";
const SCHNELL_PATH: &str = "fal-ai/flux/schnell";
const IMAGE_TO_IMAGE_PATH: &str = "fal-ai/flux/dev/image-to-image";
const DEFAULT_STRENGTH: f32 = 0.7;

/// Translate an aspect-ratio string into a fal.ai size preset.
///
/// Unknown ratios fall back to square.
fn size_preset(aspect_ratio: &str) -> &'static str {
    match aspect_ratio {
        "1:1" => "square_hd",
        "1.91:1" => "landscape_16_9",
        "4:5" => "portrait_4_3",
        "9:16" => "portrait_16_9",
        "16:9" => "landscape_16_9",
        "2:3" => "portrait_4_3",
        "3:2" => "landscape_4_3",
        _ => "square_hd",
    }
}

/// Flux (fal.ai) API client.
#[derive(Debug, Clone)]
pub struct FluxClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FluxClient {
    /// Creates a new Flux client.
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new Flux client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: FAL_API_URL.to_string(),
        }
    }

    /// Creates a client from the `FAL_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("FAL_API_KEY").map_err(|_| {
            ModelsError::new(
                FluxErrorKind::Http("FAL_API_KEY environment variable not set".into()).into(),
            )
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL (used by wire tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// A reference image usable by the image-to-image route: a public URL,
    /// not an inline data URL.
    fn public_reference(request: &ImageRequest) -> Option<&str> {
        request
            .reference_image()
            .as_deref()
            .filter(|reference| !reference.starts_with("data:"))
    }

    async fn post_flux(&self, path: &str, body: serde_json::Value) -> Result<FluxResponse, ModelsError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .header("Authorization", format!("Key {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to fal.ai");
                ModelsError::new(FluxErrorKind::Http(format!("Request failed: {}", e)).into())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "fal.ai returned error");
            return Err(ModelsError::new(
                FluxErrorKind::ApiError {
                    status: status.as_u16(),
                    message: body,
                }
                .into(),
            ));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Flux response");
            ModelsError::new(FluxErrorKind::Parse(format!("Failed to parse response: {}", e)).into())
        })
    }

    /// Text-to-image via `flux/schnell`.
    #[instrument(skip(self, request))]
    pub async fn generate_schnell(
        &self,
        request: &FluxTextToImageRequest,
    ) -> Result<FluxResponse, ModelsError> {
        debug!("Sending text-to-image request to fal.ai");
        let body = serde_json::to_value(request)
            .map_err(|e| ModelsError::new(FluxErrorKind::Builder(e.to_string()).into()))?;
        self.post_flux(SCHNELL_PATH, body).await
    }

    /// Image-to-image via `flux/dev/image-to-image`.
    #[instrument(skip(self, request), fields(image_url = %request.image_url()))]
    pub async fn generate_image_to_image(
        &self,
        request: &FluxImageToImageRequest,
    ) -> Result<FluxResponse, ModelsError> {
        debug!("Sending image-to-image request to fal.ai");
        let body = serde_json::to_value(request)
            .map_err(|e| ModelsError::new(FluxErrorKind::Builder(e.to_string()).into()))?;
        self.post_flux(IMAGE_TO_IMAGE_PATH, body).await
    }
}

#[async_trait::async_trait]
impl ImageDriver for FluxClient {
    fn provider(&self) -> ImageProvider {
        ImageProvider::Flux
    }

    fn supports_reference_images(&self) -> bool {
        true
    }

    #[instrument(skip(self, request), fields(aspect = %request.aspect_ratio()))]
    async fn render(
        &self,
        request: &ImageRequest,
    ) -> Result<GeneratedImage, adforge_error::AdforgeError> {
        let response = if let Some(reference) = Self::public_reference(request) {
            let img2img = FluxImageToImageRequest::builder()
                .prompt(request.prompt().clone())
                .image_url(reference)
                .strength(request.influence_strength().unwrap_or(DEFAULT_STRENGTH))
                .build()
                .map_err(|e| ModelsError::new(FluxErrorKind::Builder(e.to_string()).into()))?;
            self.generate_image_to_image(&img2img).await?
        } else {
            // Base64 references are not supported by the img2img route.
            let text_to_image = FluxTextToImageRequest::builder()
                .prompt(request.prompt().clone())
                .image_size(size_preset(request.aspect_ratio()))
                .build()
                .map_err(|e| ModelsError::new(FluxErrorKind::Builder(e.to_string()).into()))?;
            self.generate_schnell(&text_to_image).await?
        };

        let url = response
            .first_url()
            .ok_or_else(|| ModelsError::new(FluxErrorKind::MissingUrl.into()))?;

        debug!(url = %url, "Flux image generated");
        Ok(GeneratedImage::new(ImageProvider::Flux, url))
    }
}
