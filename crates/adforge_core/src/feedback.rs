//! Section feedback for the refinement workflow.

use crate::CreativePackage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-text corrections, one slot per package section.
///
/// Absent and blank notes mean "leave this section alone"; the refinement
/// prompt only names sections that carry feedback.
///
/// # Examples
///
/// ```
/// use adforge_core::SectionFeedback;
///
/// let mut feedback = SectionFeedback::default();
/// assert!(feedback.is_empty());
///
/// feedback.hooks = Some("Too salesy, lean into curiosity".to_string());
/// assert!(!feedback.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SectionFeedback {
    /// Feedback on the hooks section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
    /// Feedback on the ad copy section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_copy: Option<String>,
    /// Global feedback on image prompts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompts: Option<String>,
    /// Per-image feedback keyed by image-prompt index
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub per_image_feedback: BTreeMap<usize, String>,
    /// Feedback on the layout spec
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_spec: Option<String>,
    /// Feedback on the A/B variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ab_variants: Option<String>,
}

impl SectionFeedback {
    /// True when no section carries a non-blank note.
    pub fn is_empty(&self) -> bool {
        fn blank(note: &Option<String>) -> bool {
            note.as_deref().is_none_or(|s| s.trim().is_empty())
        }

        blank(&self.hooks)
            && blank(&self.ad_copy)
            && blank(&self.image_prompts)
            && blank(&self.layout_spec)
            && blank(&self.ab_variants)
            && self
                .per_image_feedback
                .values()
                .all(|note| note.trim().is_empty())
    }
}

/// A request to regenerate a package with targeted corrections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct RefinementRequest {
    /// The package being corrected
    previous: CreativePackage,
    /// Section-scoped corrections
    feedback: SectionFeedback,
}

impl RefinementRequest {
    /// Pair a previous package with its corrections.
    pub fn new(previous: CreativePackage, feedback: SectionFeedback) -> Self {
        Self { previous, feedback }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_notes_count_as_empty() {
        let feedback = SectionFeedback {
            hooks: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(feedback.is_empty());
    }

    #[test]
    fn per_image_note_counts_as_feedback() {
        let mut feedback = SectionFeedback::default();
        feedback
            .per_image_feedback
            .insert(1, "Background too busy".to_string());
        assert!(!feedback.is_empty());
    }

    #[test]
    fn empty_per_image_map_is_skipped_on_the_wire() {
        let feedback = SectionFeedback::default();
        let json = serde_json::to_string(&feedback).unwrap();
        assert_eq!(json, "{}");
    }
}
