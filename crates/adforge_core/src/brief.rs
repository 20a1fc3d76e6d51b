//! Campaign brief types.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// What the campaign is optimizing for.
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
pub enum Objective {
    /// Drive purchases or signups
    Conversions,
    /// Drive clicks to a destination
    Traffic,
    /// Maximize reach and recall
    Awareness,
    /// Re-engage previous visitors
    Retargeting,
}

/// A single campaign's inputs.
///
/// # Examples
///
/// ```
/// use adforge_core::{CampaignBrief, Objective, Platform};
///
/// let brief = CampaignBrief::builder()
///     .product_name("Midnight Roast")
///     .product_description("A dark roast for late shifts")
///     .audience_segment("Night-shift nurses")
///     .emotional_angle("Relief after a long night")
///     .offer("20% off the first bag")
///     .platform(Platform::InstagramFeed)
///     .objective(Objective::Conversions)
///     .build()
///     .unwrap();
///
/// assert_eq!(brief.platform().ad_size().aspect_ratio, "1:1");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct CampaignBrief {
    /// Product or offer name
    product_name: String,
    /// What the product is and does
    product_description: String,
    /// Audience segment this campaign targets
    audience_segment: String,
    /// Emotional angle the creative should take
    emotional_angle: String,
    /// The concrete offer
    offer: String,
    /// Target placement
    platform: Platform,
    /// Campaign objective
    objective: Objective,
    /// Free-text context for the model
    #[builder(default)]
    #[serde(default)]
    additional_context: String,
}

impl CampaignBrief {
    /// Creates a new builder for `CampaignBrief`.
    pub fn builder() -> CampaignBriefBuilder {
        CampaignBriefBuilder::default()
    }
}

/// Session-only reference images, each a base64 data URL.
///
/// These ride along with a generation request but are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImages {
    /// A model/person reference
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// A product variant reference
    #[serde(skip_serializing_if = "Option::is_none")]
    product_variant: Option<String>,
}

impl ReferenceImages {
    /// Create a reference image set from optional data URLs.
    pub fn new(model: Option<String>, product_variant: Option<String>) -> Self {
        Self {
            model,
            product_variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_json_round_trips() {
        let brief = CampaignBrief::builder()
            .product_name("Widget")
            .product_description("A widget")
            .audience_segment("Widget fans")
            .emotional_angle("Delight")
            .offer("Free shipping")
            .platform(Platform::MetaStory)
            .objective(Objective::Traffic)
            .additional_context("Launch week")
            .build()
            .unwrap();

        let json = serde_json::to_string(&brief).unwrap();
        assert!(json.contains("\"platform\":\"meta_story\""));
        assert!(json.contains("\"objective\":\"traffic\""));

        let back: CampaignBrief = serde_json::from_str(&json).unwrap();
        assert_eq!(back, brief);
    }
}
