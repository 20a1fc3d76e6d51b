//! fal.ai Flux data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for the `flux/schnell` text-to-image endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct FluxTextToImageRequest {
    /// The generation prompt
    prompt: String,
    /// fal.ai size preset (e.g. "square_hd")
    image_size: String,
    /// Number of inference steps; schnell is tuned for 4
    #[builder(default = "4")]
    num_inference_steps: u32,
}

impl FluxTextToImageRequest {
    /// Creates a new builder for `FluxTextToImageRequest`.
    pub fn builder() -> FluxTextToImageRequestBuilder {
        FluxTextToImageRequestBuilder::default()
    }
}

/// Request body for the `flux/dev/image-to-image` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct FluxImageToImageRequest {
    /// The generation prompt
    prompt: String,
    /// Public URL of the reference image
    image_url: String,
    /// How strongly the reference steers generation (0.0-1.0)
    strength: f32,
    /// Number of inference steps
    #[builder(default = "28")]
    num_inference_steps: u32,
}

impl FluxImageToImageRequest {
    /// Creates a new builder for `FluxImageToImageRequest`.
    pub fn builder() -> FluxImageToImageRequestBuilder {
        FluxImageToImageRequestBuilder::default()
    }
}

/// One generated image in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FluxImage {
    /// Hosted URL of the generated image
    #[serde(default)]
    url: Option<String>,
}

/// Response from either Flux endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FluxResponse {
    /// Generated images
    #[serde(default)]
    images: Vec<FluxImage>,
}

impl FluxResponse {
    /// The first generated image's URL, if any.
    pub fn first_url(&self) -> Option<&str> {
        self.images.first().and_then(|image| image.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schnell_defaults_to_four_steps() {
        let request = FluxTextToImageRequest::builder()
            .prompt("a mug")
            .image_size("square_hd")
            .build()
            .unwrap();
        assert_eq!(*request.num_inference_steps(), 4);
    }

    #[test]
    fn image_to_image_defaults_to_twenty_eight_steps() {
        let request = FluxImageToImageRequest::builder()
            .prompt("a mug")
            .image_url("https://example.com/ref.png")
            .strength(0.7f32)
            .build()
            .unwrap();
        assert_eq!(*request.num_inference_steps(), 28);
    }

    #[test]
    fn response_first_url() {
        let body = r#"{"images": [{"url": "https://fal.media/img/1.png"}]}"#;
        let response: FluxResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_url(), Some("https://fal.media/img/1.png"));
    }
}
