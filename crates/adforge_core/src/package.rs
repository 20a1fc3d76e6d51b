//! The creative package shape parsed from model output.
//!
//! Field names mirror the JSON contract given to the text model
//! (camelCase, with the `problemAgitateCTA` spelling preserved), so the
//! extracted document deserializes directly into these types.

use serde::{Deserialize, Serialize};

/// A scroll-stopping opening line with its persuasion mechanics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Hook text, at most ~125 characters
    text: String,
    /// Copywriting technique (e.g. "Pattern Interrupt")
    technique: String,
    /// Psychological trigger (e.g. "Loss Aversion")
    psychological_trigger: String,
}

impl Hook {
    /// Create a hook from its parts.
    pub fn new(
        text: impl Into<String>,
        technique: impl Into<String>,
        psychological_trigger: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            technique: technique.into(),
            psychological_trigger: psychological_trigger.into(),
        }
    }
}

/// One copy framework's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct AdCopyBlock {
    /// Framework name (e.g. "Problem-Agitate-CTA")
    framework_name: String,
    /// Benefit-driven headline
    headline: String,
    /// Two to three sentences of body copy
    body: String,
    /// Call to action from the approved list
    cta: String,
}

impl AdCopyBlock {
    /// Create a copy block from its parts.
    pub fn new(
        framework_name: impl Into<String>,
        headline: impl Into<String>,
        body: impl Into<String>,
        cta: impl Into<String>,
    ) -> Self {
        Self {
            framework_name: framework_name.into(),
            headline: headline.into(),
            body: body.into(),
            cta: cta.into(),
        }
    }
}

/// The three fixed copy frameworks generated for every campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct AdCopySet {
    /// Problem-Agitate-CTA framework
    #[serde(rename = "problemAgitateCTA")]
    problem_agitate_cta: AdCopyBlock,
    /// Before/after comparison framework
    comparison: AdCopyBlock,
    /// Myth-busting framework
    myth_bust: AdCopyBlock,
}

impl AdCopySet {
    /// Create a copy set from its three frameworks.
    pub fn new(
        problem_agitate_cta: AdCopyBlock,
        comparison: AdCopyBlock,
        myth_bust: AdCopyBlock,
    ) -> Self {
        Self {
            problem_agitate_cta,
            comparison,
            myth_bust,
        }
    }

    /// The three blocks in presentation order.
    pub fn blocks(&self) -> [&AdCopyBlock; 3] {
        [&self.problem_agitate_cta, &self.comparison, &self.myth_bust]
    }
}

/// What a generated image is for.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImagePurpose {
    /// Clean background for copy overlay
    TextOverlay,
    /// Product hero shot
    Hero,
    /// In-context lifestyle scene
    Lifestyle,
}

/// A prompt for one image-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrompt {
    /// What the image is for
    purpose: ImagePurpose,
    /// The generation prompt
    prompt: String,
    /// What the generator should avoid
    negative_prompt: String,
    /// Aspect-ratio string (e.g. "4:5")
    aspect_ratio: String,
    /// URL of the rendered image, filled in after generation
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_url: Option<String>,
}

impl ImagePrompt {
    /// Create an image prompt.
    pub fn new(
        purpose: ImagePurpose,
        prompt: impl Into<String>,
        negative_prompt: impl Into<String>,
        aspect_ratio: impl Into<String>,
    ) -> Self {
        Self {
            purpose,
            prompt: prompt.into(),
            negative_prompt: negative_prompt.into(),
            aspect_ratio: aspect_ratio.into(),
            generated_url: None,
        }
    }

    /// Record the rendered image URL on this prompt.
    pub fn set_generated_url(&mut self, url: impl Into<String>) {
        self.generated_url = Some(url.into());
    }
}

/// Layout guidance for assembling the final ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpec {
    /// Canvas dimensions (e.g. "1080×1080px")
    platform_dimensions: String,
    /// Safe-zone description
    safe_zone: String,
    /// Ordered text hierarchy guidance
    text_hierarchy: Vec<String>,
    /// Where the CTA goes
    cta_placement: String,
    /// How to apply brand colors
    color_usage: String,
    /// Moodboard search keywords
    moodboard_keywords: Vec<String>,
}

impl LayoutSpec {
    /// Create a layout spec from its parts.
    pub fn new(
        platform_dimensions: impl Into<String>,
        safe_zone: impl Into<String>,
        text_hierarchy: Vec<String>,
        cta_placement: impl Into<String>,
        color_usage: impl Into<String>,
        moodboard_keywords: Vec<String>,
    ) -> Self {
        Self {
            platform_dimensions: platform_dimensions.into(),
            safe_zone: safe_zone.into(),
            text_hierarchy,
            cta_placement: cta_placement.into(),
            color_usage: color_usage.into(),
            moodboard_keywords,
        }
    }
}

/// Identifier for an A/B test variant.
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
pub enum VariantId {
    /// Variant A
    A,
    /// Variant B
    B,
    /// Variant C
    C,
}

/// One structural hypothesis for an A/B test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct AbVariant {
    /// Which variant this is
    variant_id: VariantId,
    /// What the variant is testing and why
    hypothesis: String,
    /// Full hook text for this variant
    hook: String,
    /// What makes this variant structurally different
    differentiator: String,
}

impl AbVariant {
    /// Create a variant from its parts.
    pub fn new(
        variant_id: VariantId,
        hypothesis: impl Into<String>,
        hook: impl Into<String>,
        differentiator: impl Into<String>,
    ) -> Self {
        Self {
            variant_id,
            hypothesis: hypothesis.into(),
            hook: hook.into(),
            differentiator: differentiator.into(),
        }
    }
}

/// The complete creative package for one campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct CreativePackage {
    /// Five scroll-stopping hooks
    hooks: Vec<Hook>,
    /// Three fixed copy frameworks
    ad_copy: AdCopySet,
    /// Image prompts, one per purpose
    image_prompts: Vec<ImagePrompt>,
    /// Layout guidance
    layout_spec: LayoutSpec,
    /// Three A/B test variants
    ab_variants: Vec<AbVariant>,
}

impl CreativePackage {
    /// Create a package from its sections.
    pub fn new(
        hooks: Vec<Hook>,
        ad_copy: AdCopySet,
        image_prompts: Vec<ImagePrompt>,
        layout_spec: LayoutSpec,
        ab_variants: Vec<AbVariant>,
    ) -> Self {
        Self {
            hooks,
            ad_copy,
            image_prompts,
            layout_spec,
            ab_variants,
        }
    }

    /// Mutable access to one image prompt by index.
    pub fn image_prompt_mut(&mut self, index: usize) -> Option<&mut ImagePrompt> {
        self.image_prompts.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A response body shaped the way the model is instructed to answer.
    const MODEL_JSON: &str = r#"{
      "hooks": [
        {"text": "Your coffee is lying to you", "technique": "Pattern Interrupt", "psychologicalTrigger": "Curiosity"}
      ],
      "adCopy": {
        "problemAgitateCTA": {"frameworkName": "Problem-Agitate-CTA", "headline": "h", "body": "b", "cta": "Shop Now"},
        "comparison": {"frameworkName": "Before/After Comparison", "headline": "h", "body": "b", "cta": "Shop Now"},
        "mythBust": {"frameworkName": "Myth Bust", "headline": "h", "body": "b", "cta": "Shop Now"}
      },
      "imagePrompts": [
        {"purpose": "hero", "prompt": "p", "negativePrompt": "n", "aspectRatio": "1:1"},
        {"purpose": "lifestyle", "prompt": "p", "negativePrompt": "n", "aspectRatio": "1:1"},
        {"purpose": "text_overlay", "prompt": "p", "negativePrompt": "n", "aspectRatio": "1:1"}
      ],
      "layoutSpec": {
        "platformDimensions": "1080×1080px",
        "safeZone": "centered",
        "textHierarchy": ["1. Hook"],
        "ctaPlacement": "bottom third",
        "colorUsage": "primary on accents",
        "moodboardKeywords": ["warm", "matte"]
      },
      "abVariants": [
        {"variantId": "A", "hypothesis": "h", "hook": "k", "differentiator": "d"},
        {"variantId": "B", "hypothesis": "h", "hook": "k", "differentiator": "d"},
        {"variantId": "C", "hypothesis": "h", "hook": "k", "differentiator": "d"}
      ]
    }"#;

    #[test]
    fn model_json_deserializes_directly() {
        let package: CreativePackage = serde_json::from_str(MODEL_JSON).unwrap();
        assert_eq!(package.hooks().len(), 1);
        assert_eq!(package.image_prompts()[0].purpose(), &ImagePurpose::Hero);
        assert_eq!(package.ab_variants()[2].variant_id(), &VariantId::C);
        assert_eq!(
            package.ad_copy().problem_agitate_cta().framework_name(),
            "Problem-Agitate-CTA"
        );
    }

    #[test]
    fn generated_url_is_absent_until_set() {
        let mut package: CreativePackage = serde_json::from_str(MODEL_JSON).unwrap();
        let json = serde_json::to_string(&package).unwrap();
        assert!(!json.contains("generatedUrl"));

        package
            .image_prompt_mut(0)
            .unwrap()
            .set_generated_url("https://img.example/1.png");
        let json = serde_json::to_string(&package).unwrap();
        assert!(json.contains("\"generatedUrl\":\"https://img.example/1.png\""));
    }

    #[test]
    fn copy_set_preserves_framework_spelling() {
        let package: CreativePackage = serde_json::from_str(MODEL_JSON).unwrap();
        let json = serde_json::to_value(&package).unwrap();
        assert!(json["adCopy"].get("problemAgitateCTA").is_some());
        assert!(json["adCopy"].get("mythBust").is_some());
    }
}
