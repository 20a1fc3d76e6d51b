//! Studio orchestration: assemble, generate, extract, parse.

use crate::assembly::{assemble_generate, assemble_refine};
use crate::extraction::parse_package;
use adforge_core::{
    BrandDna, CampaignBrief, CreativePackage, RefinementRequest, ReferenceImages,
};
use adforge_error::AdforgeResult;
use adforge_interface::CreativeDriver;
use tracing::{debug, info, instrument};

const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Drives a text backend through the generate/refine workflow.
///
/// The studio owns the tunables (token budget, temperature, model override)
/// and leaves provider mechanics to the driver.
pub struct CreativeStudio<D: CreativeDriver> {
    driver: D,
    max_tokens: u32,
    temperature: Option<f32>,
    model: Option<String>,
}

impl<D: CreativeDriver> CreativeStudio<D> {
    /// Create a studio over the given driver with default tunables.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            model: None,
        }
    }

    /// Override the token budget for package generation.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Override the driver's default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    async fn run(&self, mut request: adforge_core::GenerateRequest) -> AdforgeResult<CreativePackage> {
        request.max_tokens = Some(self.max_tokens);
        request.temperature = self.temperature;
        request.model = self.model.clone();

        let response = self.driver.generate(&request).await?;
        let package = parse_package(&response.text())?;
        debug!(
            hooks = package.hooks().len(),
            image_prompts = package.image_prompts().len(),
            "Parsed creative package"
        );
        Ok(package)
    }

    /// Generate a fresh creative package for a campaign.
    #[instrument(skip_all, fields(brand = %brand.name(), provider = self.driver.provider_name()))]
    pub async fn generate(
        &self,
        brand: &BrandDna,
        brief: &CampaignBrief,
        refs: &ReferenceImages,
    ) -> AdforgeResult<CreativePackage> {
        info!(product = %brief.product_name(), "Generating creative package");
        self.run(assemble_generate(brand, brief, refs)).await
    }

    /// Regenerate a package with section-scoped corrections.
    #[instrument(skip_all, fields(brand = %brand.name(), provider = self.driver.provider_name()))]
    pub async fn refine(
        &self,
        brand: &BrandDna,
        brief: &CampaignBrief,
        refs: &ReferenceImages,
        refinement: &RefinementRequest,
    ) -> AdforgeResult<CreativePackage> {
        info!(product = %brief.product_name(), "Refining creative package");
        self.run(assemble_refine(brand, brief, refs, refinement))
            .await
    }
}
