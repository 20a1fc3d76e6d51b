//! Handlers for the generate, refine, and render commands.

use crate::cli::commands::{OutputFormat, ProviderArg};
use adforge::{
    require_env_key, AdforgeConfig, AnthropicClient, BrandDna, CampaignBrief, CampaignSession,
    CreativePackage, CreativeStudio, DataUrl, FluxClient, GeminiImageClient, IdeogramClient,
    ImageProvider, ImageRequest, ImageRouter, Objective, Platform, ProfileStore,
    RefinementRequest, ReferenceImages, SavedCampaign, SectionFeedback,
};
use adforge_error::{AdforgeResult, ConfigError, CreativeError, CreativeErrorKind, StorageError,
    StorageErrorKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Campaign brief file shape (snake_case TOML keys).
#[derive(Debug, Deserialize)]
struct BriefFile {
    product_name: String,
    product_description: String,
    audience_segment: String,
    emotional_angle: String,
    offer: String,
    platform: Platform,
    objective: Objective,
    #[serde(default)]
    additional_context: String,
}

impl BriefFile {
    fn into_brief(self) -> AdforgeResult<CampaignBrief> {
        CampaignBrief::builder()
            .product_name(self.product_name)
            .product_description(self.product_description)
            .audience_segment(self.audience_segment)
            .emotional_angle(self.emotional_angle)
            .offer(self.offer)
            .platform(self.platform)
            .objective(self.objective)
            .additional_context(self.additional_context)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid brief: {}", e)).into())
    }
}

/// Section feedback file shape (snake_case TOML keys, string image indices).
#[derive(Debug, Deserialize, Default)]
struct FeedbackFile {
    #[serde(default)]
    hooks: Option<String>,
    #[serde(default)]
    ad_copy: Option<String>,
    #[serde(default)]
    image_prompts: Option<String>,
    #[serde(default)]
    per_image: BTreeMap<String, String>,
    #[serde(default)]
    layout_spec: Option<String>,
    #[serde(default)]
    ab_variants: Option<String>,
}

impl FeedbackFile {
    fn into_feedback(self) -> AdforgeResult<SectionFeedback> {
        let mut per_image_feedback = BTreeMap::new();
        for (key, note) in self.per_image {
            let index: usize = key.parse().map_err(|_| {
                ConfigError::new(format!("Invalid image index '{}' in feedback file", key))
            })?;
            per_image_feedback.insert(index, note);
        }

        Ok(SectionFeedback {
            hooks: self.hooks,
            ad_copy: self.ad_copy,
            image_prompts: self.image_prompts,
            per_image_feedback,
            layout_spec: self.layout_spec,
            ab_variants: self.ab_variants,
        })
    }
}

pub(crate) fn open_store(config: &AdforgeConfig) -> AdforgeResult<ProfileStore> {
    Ok(ProfileStore::new(config.data_dir())?)
}

/// Resolve a brand: an explicit id, or the active brand.
pub(crate) async fn resolve_brand(
    store: &ProfileStore,
    id: Option<Uuid>,
) -> AdforgeResult<BrandDna> {
    let brand = match id {
        Some(id) => store.brand(id).await?,
        None => store.active_brand().await?,
    };
    brand.ok_or_else(|| {
        StorageError::new(StorageErrorKind::NotFound(
            "no brand profile found; import one with `adforge brand import`".to_string(),
        ))
        .into()
    })
}

fn read_to_string(path: &Path) -> AdforgeResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

fn parse_brief(path: &Path) -> AdforgeResult<CampaignBrief> {
    let raw = read_to_string(path)?;
    let file: BriefFile = toml::from_str(&raw)
        .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;
    file.into_brief()
}

fn parse_feedback(path: &Path) -> AdforgeResult<SectionFeedback> {
    let raw = read_to_string(path)?;
    let file: FeedbackFile = toml::from_str(&raw)
        .map_err(|e| ConfigError::new(format!("{}: {}", path.display(), e)))?;
    file.into_feedback()
}

fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

/// Read a local image file into a base64 data URL.
fn data_url_from_path(path: &Path) -> AdforgeResult<String> {
    use base64::Engine;

    let bytes = std::fs::read(path).map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(DataUrl::new(mime_for_extension(path), encoded).format())
}

fn reference_images(
    ref_model: Option<&PathBuf>,
    ref_product: Option<&PathBuf>,
) -> AdforgeResult<ReferenceImages> {
    let model = ref_model.map(|path| data_url_from_path(path)).transpose()?;
    let product = ref_product
        .map(|path| data_url_from_path(path))
        .transpose()?;
    Ok(ReferenceImages::new(model, product))
}

fn build_studio(config: &AdforgeConfig) -> AdforgeResult<CreativeStudio<AnthropicClient>> {
    let api_key = require_env_key("ANTHROPIC_API_KEY")?;
    let mut studio = CreativeStudio::new(AnthropicClient::new(api_key, &config.text.model))
        .with_max_tokens(config.text.max_tokens);
    if let Some(temperature) = config.text.temperature {
        studio = studio.with_temperature(temperature);
    }
    Ok(studio)
}

fn build_image_router(
    config: &AdforgeConfig,
    provider: ImageProvider,
) -> AdforgeResult<ImageRouter> {
    let mut router = ImageRouter::new();
    match provider {
        ImageProvider::Gemini => {
            let api_key = require_env_key("GOOGLE_AI_API_KEY")?;
            router.register(Box::new(GeminiImageClient::new(
                api_key,
                &config.image.gemini_model,
            )));
        }
        ImageProvider::Ideogram => {
            let api_key = require_env_key("IDEOGRAM_API_KEY")?;
            router.register(Box::new(IdeogramClient::new(api_key)));
        }
        ImageProvider::Flux => {
            let api_key = require_env_key("FAL_API_KEY")?;
            router.register(Box::new(FluxClient::new(api_key)));
        }
    }
    Ok(router)
}

pub(crate) fn print_package(package: &CreativePackage, format: OutputFormat) -> AdforgeResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(package)
                .map_err(|e| CreativeError::new(CreativeErrorKind::Parse(e.to_string())))?;
            println!("{json}");
        }
        OutputFormat::Human => {
            println!("Hooks:");
            for (i, hook) in package.hooks().iter().enumerate() {
                println!("  {}. {} [{}]", i + 1, hook.text(), hook.technique());
            }
            println!("\nAd copy:");
            for block in package.ad_copy().blocks() {
                println!("  {}: {} — {}", block.framework_name(), block.headline(), block.cta());
            }
            println!("\nImage prompts:");
            for (i, prompt) in package.image_prompts().iter().enumerate() {
                let rendered = match prompt.generated_url() {
                    Some(url) => format!(" -> {url}"),
                    None => String::new(),
                };
                println!("  {}. [{}] {} ({}){}", i, prompt.purpose(), prompt.prompt(), prompt.aspect_ratio(), rendered);
            }
            let layout = package.layout_spec();
            println!("\nLayout: {} | {}", layout.platform_dimensions(), layout.cta_placement());
            println!("\nA/B variants:");
            for variant in package.ab_variants() {
                println!("  {}: {}", variant.variant_id(), variant.hypothesis());
            }
        }
    }
    Ok(())
}

/// Generate a fresh creative package and save it as the brand's campaign.
pub async fn run_generate(
    brief_path: &Path,
    brand_id: Option<Uuid>,
    ref_model: Option<&PathBuf>,
    ref_product: Option<&PathBuf>,
    format: OutputFormat,
) -> AdforgeResult<()> {
    let config = AdforgeConfig::load()?;
    let store = open_store(&config)?;
    let brand = resolve_brand(&store, brand_id).await?;
    let brief = parse_brief(brief_path)?;
    let refs = reference_images(ref_model, ref_product)?;
    let studio = build_studio(&config)?;

    let mut session = CampaignSession::new();
    session.begin_generation();

    let package = match studio.generate(&brand, &brief, &refs).await {
        Ok(package) => {
            session.complete(package.clone());
            package
        }
        Err(e) => {
            session.fail(e.to_string());
            return Err(e);
        }
    };

    let campaign = SavedCampaign::new(*brand.id(), brief, package);
    store.save_campaign(&campaign).await?;
    info!(brand = %brand.name(), "Campaign saved");

    print_package(campaign.package(), format)
}

/// Regenerate the saved campaign's package with section feedback.
pub async fn run_refine(
    feedback_path: &Path,
    brand_id: Option<Uuid>,
    format: OutputFormat,
) -> AdforgeResult<()> {
    let config = AdforgeConfig::load()?;
    let store = open_store(&config)?;
    let brand = resolve_brand(&store, brand_id).await?;

    let mut campaign = store.campaign(*brand.id()).await?.ok_or_else(|| {
        StorageError::new(StorageErrorKind::NotFound(format!(
            "no saved campaign for brand {}; run `adforge generate` first",
            brand.id()
        )))
    })?;

    let feedback = parse_feedback(feedback_path)?;
    let previous = campaign.package().clone();
    let refinement = RefinementRequest::new(previous.clone(), feedback);
    let studio = build_studio(&config)?;

    let mut session = CampaignSession::new();
    session.begin_generation();

    let package = match studio
        .refine(&brand, campaign.brief(), &ReferenceImages::default(), &refinement)
        .await
    {
        Ok(package) => {
            session.complete_refinement(package.clone(), previous);
            package
        }
        Err(e) => {
            session.fail(e.to_string());
            return Err(e);
        }
    };

    campaign.replace_package(package);
    store.save_campaign(&campaign).await?;
    info!(brand = %brand.name(), "Refined campaign saved");

    print_package(campaign.package(), format)
}

/// Render one image prompt from the saved campaign on the chosen provider.
pub async fn run_render(
    index: usize,
    provider: ProviderArg,
    reference: Option<&str>,
    strength: Option<f32>,
    brand_id: Option<Uuid>,
    format: OutputFormat,
) -> AdforgeResult<()> {
    let config = AdforgeConfig::load()?;
    let store = open_store(&config)?;
    let brand = resolve_brand(&store, brand_id).await?;
    let provider: ImageProvider = provider.into();

    let mut campaign = store.campaign(*brand.id()).await?.ok_or_else(|| {
        StorageError::new(StorageErrorKind::NotFound(format!(
            "no saved campaign for brand {}; run `adforge generate` first",
            brand.id()
        )))
    })?;

    let prompt = campaign
        .package()
        .image_prompts()
        .get(index)
        .ok_or_else(|| {
            CreativeError::new(CreativeErrorKind::PromptIndexOutOfRange {
                index,
                len: campaign.package().image_prompts().len(),
            })
        })?
        .clone();

    // A local path becomes a data URL; anything else passes through as-is.
    let reference = reference
        .map(|r| {
            let path = Path::new(r);
            if path.exists() {
                data_url_from_path(path)
            } else {
                Ok(r.to_string())
            }
        })
        .transpose()?;

    let mut session = CampaignSession::new();
    if let Some(value) = strength {
        session.set_strength(index, value);
    }

    let request = ImageRequest::builder()
        .prompt(prompt.prompt().clone())
        .negative_prompt(prompt.negative_prompt().clone())
        .aspect_ratio(prompt.aspect_ratio().clone())
        .reference_image(reference)
        .influence_strength(Some(session.strength(index)))
        .build()
        .map_err(|e| CreativeError::new(CreativeErrorKind::Parse(e.to_string())))?;

    let router = build_image_router(&config, provider)?;
    session.begin_image(index);

    let image = match router.render(provider, &request).await {
        Ok(image) => {
            session.complete_image(index, image.url().clone());
            image
        }
        Err(e) => {
            session.fail_image(index, e.to_string());
            return Err(e);
        }
    };

    if let Some(slot) = campaign.package_mut().image_prompt_mut(index) {
        slot.set_generated_url(image.url().clone());
    }
    store.save_campaign(&campaign).await?;
    info!(provider = %image.provider(), "Image rendered");

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&image)
                .map_err(|e| CreativeError::new(CreativeErrorKind::Parse(e.to_string())))?;
            println!("{json}");
        }
        OutputFormat::Human => println!("{}", image.url()),
    }
    Ok(())
}
