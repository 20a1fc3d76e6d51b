//! Image router dispatch tests against stub drivers.

use adforge_core::{GeneratedImage, ImageProvider, ImageRequest};
use adforge_creative::ImageRouter;
use adforge_error::AdforgeResult;
use adforge_interface::ImageDriver;

/// A driver that returns a fixed URL for its provider.
struct StubDriver {
    provider: ImageProvider,
    url: &'static str,
    supports_refs: bool,
}

#[async_trait::async_trait]
impl ImageDriver for StubDriver {
    async fn render(&self, _req: &ImageRequest) -> AdforgeResult<GeneratedImage> {
        Ok(GeneratedImage::new(self.provider, self.url))
    }

    fn provider(&self) -> ImageProvider {
        self.provider
    }

    fn supports_reference_images(&self) -> bool {
        self.supports_refs
    }
}

fn request() -> ImageRequest {
    ImageRequest::builder()
        .prompt("a mug")
        .aspect_ratio("1:1")
        .build()
        .unwrap()
}

#[tokio::test]
async fn routes_to_the_requested_provider() {
    let router = ImageRouter::new()
        .with_driver(Box::new(StubDriver {
            provider: ImageProvider::Ideogram,
            url: "https://ideogram.ai/img/1.png",
            supports_refs: false,
        }))
        .with_driver(Box::new(StubDriver {
            provider: ImageProvider::Flux,
            url: "https://fal.media/img/1.png",
            supports_refs: true,
        }));

    let image = router
        .render(ImageProvider::Flux, &request())
        .await
        .unwrap();
    assert_eq!(image.provider(), &ImageProvider::Flux);
    assert_eq!(image.url(), "https://fal.media/img/1.png");

    let image = router
        .render(ImageProvider::Ideogram, &request())
        .await
        .unwrap();
    assert_eq!(image.url(), "https://ideogram.ai/img/1.png");
}

#[tokio::test]
async fn unregistered_provider_is_an_error_naming_it() {
    let router = ImageRouter::new();
    let err = router
        .render(ImageProvider::Gemini, &request())
        .await
        .unwrap_err();
    assert!(format!("{}", err).contains("gemini"));
}

#[test]
fn providers_lists_registrations_in_order() {
    let router = ImageRouter::new()
        .with_driver(Box::new(StubDriver {
            provider: ImageProvider::Flux,
            url: "u",
            supports_refs: true,
        }))
        .with_driver(Box::new(StubDriver {
            provider: ImageProvider::Gemini,
            url: "u",
            supports_refs: true,
        }));

    assert_eq!(
        router.providers(),
        vec![ImageProvider::Gemini, ImageProvider::Flux]
    );
    assert!(router.supports_reference_images(ImageProvider::Gemini));
    assert!(!router.supports_reference_images(ImageProvider::Ideogram));
}
