//! Image generation request and normalized output types.

use serde::{Deserialize, Serialize};

/// Which image-generation backend to route a prompt to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageProvider {
    /// Google Gemini image generation
    Gemini,
    /// Ideogram
    Ideogram,
    /// Flux via fal.ai
    Flux,
}

/// A normalized image-generation request, provider-agnostic.
///
/// # Examples
///
/// ```
/// use adforge_core::ImageRequest;
///
/// let request = ImageRequest::builder()
///     .prompt("A matte ceramic mug on a windowsill at dawn")
///     .negative_prompt("stock photo aesthetics")
///     .aspect_ratio("4:5")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.aspect_ratio(), "4:5");
/// assert!(request.reference_image().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ImageRequest {
    /// The generation prompt
    prompt: String,
    /// What the generator should avoid
    #[builder(default)]
    #[serde(default)]
    negative_prompt: String,
    /// Aspect-ratio string (e.g. "1:1", "9:16")
    aspect_ratio: String,
    /// Optional reference image: a base64 data URL or a public URL
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_image: Option<String>,
    /// How strongly the reference steers image-to-image generation (0.0-1.0)
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    influence_strength: Option<f32>,
}

impl ImageRequest {
    /// Creates a new builder for `ImageRequest`.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}

/// The normalized result of an image-generation call.
///
/// `url` is either a hosted HTTPS URL (Ideogram, Flux) or a `data:` URL
/// carrying the image inline (Gemini).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Which provider produced the image
    provider: ImageProvider,
    /// Hosted or data URL of the image
    url: String,
}

impl GeneratedImage {
    /// Create a generated-image record.
    pub fn new(provider: ImageProvider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
        }
    }
}
