//! Brand profile types.
//!
//! A brand profile captures everything the prompt builder needs to speak in
//! a brand's voice: positioning, audience psychology, copy rules, and visual
//! guardrails. Profiles serialize with camelCase field names for
//! compatibility with existing profile JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How aware the target audience is of the problem and solution space.
///
/// Wire names are kebab-case (`problem-aware`, `solution-aware`).
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SophisticationLevel {
    /// Does not know they have the problem
    Unaware,
    /// Knows the problem, not the solutions
    ProblemAware,
    /// Knows solutions exist, not this product
    SolutionAware,
    /// Knows the product and its alternatives
    Aware,
}

/// Uploaded brand asset images, each a base64 data URL resized to ≤512px.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct BrandAssets {
    /// Brand logo
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    /// Product hero shot
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_shot: Option<String>,
    /// Brand mascot
    #[serde(skip_serializing_if = "Option::is_none")]
    mascot: Option<String>,
}

impl BrandAssets {
    /// Create an asset set from optional data URLs.
    pub fn new(logo: Option<String>, hero_shot: Option<String>, mascot: Option<String>) -> Self {
        Self {
            logo,
            hero_shot,
            mascot,
        }
    }
}

/// A complete brand profile.
///
/// # Examples
///
/// ```
/// use adforge_core::{BrandDna, SophisticationLevel};
///
/// let brand = BrandDna::builder()
///     .name("Acme Coffee")
///     .positioning("Specialty coffee for people who hate pretension")
///     .brand_personality("Warm, blunt, quietly obsessive")
///     .target_audience_primary("Remote workers aged 25-40")
///     .audience_sophistication_level(SophisticationLevel::SolutionAware)
///     .visual_style("Natural light, matte tones, lived-in spaces")
///     .build()
///     .unwrap();
///
/// assert_eq!(brand.name(), "Acme Coffee");
/// assert!(brand.forbidden_words().is_empty());
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
pub struct BrandDna {
    /// Unique profile identifier
    #[builder(default = "Uuid::new_v4()")]
    id: Uuid,
    /// Brand name
    name: String,
    /// Profile creation timestamp
    #[builder(default = "Utc::now()")]
    created_at: DateTime<Utc>,
    /// One-sentence market positioning
    positioning: String,
    /// Tone-of-voice descriptors
    #[builder(default)]
    tone_of_voice: Vec<String>,
    /// Brand personality sketch
    brand_personality: String,
    /// Primary target audience description
    target_audience_primary: String,
    /// Audience pain points
    #[builder(default)]
    audience_pains: Vec<String>,
    /// Audience desires
    #[builder(default)]
    audience_desires: Vec<String>,
    /// Audience sophistication level
    audience_sophistication_level: SophisticationLevel,
    /// Primary brand colors (hex or names)
    #[builder(default)]
    primary_colors: Vec<String>,
    /// Visual style description
    visual_style: String,
    /// Imagery to never produce
    #[builder(default)]
    imagery_dont: Vec<String>,
    /// Words copy must never use
    #[builder(default)]
    forbidden_words: Vec<String>,
    /// Words to weave into copy
    #[builder(default)]
    power_words: Vec<String>,
    /// Approved call-to-action phrases
    #[builder(default)]
    cta: Vec<String>,
    /// Named competitors
    #[builder(default)]
    competitor_names: Vec<String>,
    /// What sets the brand apart
    #[builder(default)]
    differentiators: Vec<String>,
    /// Uploaded asset images
    #[builder(default)]
    #[serde(default)]
    assets: BrandAssets,
}

impl BrandDna {
    /// Creates a new builder for `BrandDna`.
    pub fn builder() -> BrandDnaBuilder {
        BrandDnaBuilder::default()
    }
}
