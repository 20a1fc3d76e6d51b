//! Trait definitions for model backends and their capabilities.

use adforge_core::{GenerateRequest, GenerateResponse, GeneratedImage, ImageProvider, ImageRequest};
use adforge_error::AdforgeResult;
use async_trait::async_trait;

/// Core trait for text-generation backends.
///
/// This provides the minimal interface for synchronous generation of the
/// creative package text.
#[async_trait]
pub trait CreativeDriver: Send + Sync {
    /// Generate model output given a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> AdforgeResult<GenerateResponse>;

    /// Provider name (e.g., "anthropic").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-sonnet-4-6").
    fn model_name(&self) -> &str;
}

/// Trait for image-generation backends.
///
/// Each driver translates the normalized [`ImageRequest`] into its
/// provider's wire shape and normalizes the result back into a
/// [`GeneratedImage`].
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Render an image from the given request.
    async fn render(&self, req: &ImageRequest) -> AdforgeResult<GeneratedImage>;

    /// Which provider this driver speaks to.
    fn provider(&self) -> ImageProvider;

    /// Whether the backend can steer generation with a reference image.
    fn supports_reference_images(&self) -> bool {
        false
    }
}
