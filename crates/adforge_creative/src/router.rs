//! Provider routing for image generation.

use adforge_core::{GeneratedImage, ImageProvider, ImageRequest};
use adforge_error::{AdforgeResult, CreativeError, CreativeErrorKind};
use adforge_interface::ImageDriver;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Routes normalized image requests to one of the registered backends.
///
/// # Examples
///
/// ```no_run
/// use adforge_core::{ImageProvider, ImageRequest};
/// use adforge_creative::ImageRouter;
/// use adforge_models::{FluxClient, IdeogramClient};
///
/// # async fn demo() -> adforge_error::AdforgeResult<()> {
/// let router = ImageRouter::new()
///     .with_driver(Box::new(IdeogramClient::new("ideo-key")))
///     .with_driver(Box::new(FluxClient::new("fal-key")));
///
/// let request = ImageRequest::builder()
///     .prompt("A matte ceramic mug")
///     .aspect_ratio("1:1")
///     .build()
///     .unwrap();
///
/// let image = router.render(ImageProvider::Ideogram, &request).await?;
/// println!("{}", image.url());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ImageRouter {
    drivers: HashMap<ImageProvider, Box<dyn ImageDriver>>,
}

impl ImageRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver under its own provider key, replacing any previous
    /// driver for that provider.
    pub fn with_driver(mut self, driver: Box<dyn ImageDriver>) -> Self {
        self.register(driver);
        self
    }

    /// Register a driver in place.
    pub fn register(&mut self, driver: Box<dyn ImageDriver>) {
        let provider = driver.provider();
        debug!(provider = %provider, "Registering image driver");
        self.drivers.insert(provider, driver);
    }

    /// Providers currently registered.
    pub fn providers(&self) -> Vec<ImageProvider> {
        let mut providers: Vec<_> = self.drivers.keys().copied().collect();
        providers.sort();
        providers
    }

    /// Whether the given provider can steer generation with a reference image.
    pub fn supports_reference_images(&self, provider: ImageProvider) -> bool {
        self.drivers
            .get(&provider)
            .is_some_and(|driver| driver.supports_reference_images())
    }

    /// Render a request on the chosen provider.
    #[instrument(skip(self, request), fields(provider = %provider))]
    pub async fn render(
        &self,
        provider: ImageProvider,
        request: &ImageRequest,
    ) -> AdforgeResult<GeneratedImage> {
        let driver = self.drivers.get(&provider).ok_or_else(|| {
            CreativeError::new(CreativeErrorKind::UnknownProvider(provider.to_string()))
        })?;
        driver.render(request).await
    }
}
