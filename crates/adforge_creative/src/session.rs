//! Workflow state for one campaign's generation session.
//!
//! Mirrors the four-state status the review surface works against, plus
//! per-image render tracking and influence strengths for image-to-image
//! runs. The session is a pure state machine; the studio and router do the
//! actual work.

use adforge_core::CreativePackage;
use std::collections::BTreeMap;

/// Default influence strength for image-to-image rendering.
pub const DEFAULT_INFLUENCE_STRENGTH: f32 = 0.7;

/// Status of the package-generation workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    /// Nothing generated yet
    #[default]
    Idle,
    /// A generation or refinement run is in flight
    Generating,
    /// A package is ready for review
    Done {
        /// The current package
        package: CreativePackage,
        /// The package this one refined, when the run was a refinement
        previous: Option<CreativePackage>,
    },
    /// The last run failed
    Failed {
        /// What went wrong
        message: String,
    },
}

/// Status of one image prompt's render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    /// Not rendered yet
    #[default]
    Idle,
    /// A render is in flight
    Generating,
    /// Rendered successfully
    Done {
        /// Hosted or data URL of the image
        url: String,
    },
    /// The render failed
    Failed {
        /// What went wrong
        message: String,
    },
}

/// State for one campaign's creative session.
#[derive(Debug, Default)]
pub struct CampaignSession {
    state: GenerationState,
    image_states: BTreeMap<usize, ImageState>,
    strengths: BTreeMap<usize, f32>,
}

impl CampaignSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current workflow state.
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Mark a generation or refinement run as started.
    pub fn begin_generation(&mut self) {
        self.state = GenerationState::Generating;
    }

    /// Record a completed fresh generation.
    pub fn complete(&mut self, package: CreativePackage) {
        self.state = GenerationState::Done {
            package,
            previous: None,
        };
    }

    /// Record a completed refinement, keeping the prior package for
    /// comparison.
    pub fn complete_refinement(
        &mut self,
        package: CreativePackage,
        previous: CreativePackage,
    ) {
        self.state = GenerationState::Done {
            package,
            previous: Some(previous),
        };
    }

    /// Record a failed run.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = GenerationState::Failed {
            message: message.into(),
        };
    }

    /// The current package, when one is ready.
    pub fn package(&self) -> Option<&CreativePackage> {
        match &self.state {
            GenerationState::Done { package, .. } => Some(package),
            _ => None,
        }
    }

    /// Render state for one image prompt index.
    pub fn image_state(&self, index: usize) -> &ImageState {
        static IDLE: ImageState = ImageState::Idle;
        self.image_states.get(&index).unwrap_or(&IDLE)
    }

    /// Mark an image render as started.
    pub fn begin_image(&mut self, index: usize) {
        self.image_states.insert(index, ImageState::Generating);
    }

    /// Record a completed image render.
    pub fn complete_image(&mut self, index: usize, url: impl Into<String>) {
        self.image_states
            .insert(index, ImageState::Done { url: url.into() });
    }

    /// Record a failed image render.
    pub fn fail_image(&mut self, index: usize, message: impl Into<String>) {
        self.image_states.insert(
            index,
            ImageState::Failed {
                message: message.into(),
            },
        );
    }

    /// Influence strength for one image prompt index.
    pub fn strength(&self, index: usize) -> f32 {
        self.strengths
            .get(&index)
            .copied()
            .unwrap_or(DEFAULT_INFLUENCE_STRENGTH)
    }

    /// Set the influence strength for one image prompt index.
    pub fn set_strength(&mut self, index: usize, value: f32) {
        self.strengths.insert(index, value);
    }

    /// Clear all state back to idle.
    pub fn reset(&mut self) {
        self.state = GenerationState::Idle;
        self.image_states.clear();
        self.strengths.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforge_core::{
        AbVariant, AdCopyBlock, AdCopySet, Hook, ImagePrompt, ImagePurpose, LayoutSpec, VariantId,
    };

    fn package() -> CreativePackage {
        let block = || AdCopyBlock::new("f", "h", "b", "c");
        CreativePackage::new(
            vec![Hook::new("t", "q", "p")],
            AdCopySet::new(block(), block(), block()),
            vec![ImagePrompt::new(ImagePurpose::Hero, "p", "n", "1:1")],
            LayoutSpec::new("d", "s", vec![], "c", "u", vec![]),
            vec![AbVariant::new(VariantId::A, "h", "k", "d")],
        )
    }

    #[test]
    fn generation_walks_idle_generating_done() {
        let mut session = CampaignSession::new();
        assert_eq!(session.state(), &GenerationState::Idle);

        session.begin_generation();
        assert_eq!(session.state(), &GenerationState::Generating);

        session.complete(package());
        assert!(session.package().is_some());
        match session.state() {
            GenerationState::Done { previous, .. } => assert!(previous.is_none()),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn refinement_keeps_previous_package() {
        let mut session = CampaignSession::new();
        session.begin_generation();
        session.complete(package());

        let previous = session.package().unwrap().clone();
        session.begin_generation();
        assert!(session.package().is_none());

        session.complete_refinement(package(), previous);
        match session.state() {
            GenerationState::Done { previous, .. } => assert!(previous.is_some()),
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn failure_carries_the_message() {
        let mut session = CampaignSession::new();
        session.begin_generation();
        session.fail("model returned non-JSON");
        assert_eq!(
            session.state(),
            &GenerationState::Failed {
                message: "model returned non-JSON".to_string()
            }
        );
    }

    #[test]
    fn image_states_are_tracked_per_index() {
        let mut session = CampaignSession::new();
        assert_eq!(session.image_state(0), &ImageState::Idle);

        session.begin_image(0);
        session.complete_image(0, "https://img.example/1.png");
        session.begin_image(2);
        session.fail_image(2, "timeout");

        assert_eq!(
            session.image_state(0),
            &ImageState::Done {
                url: "https://img.example/1.png".to_string()
            }
        );
        assert_eq!(session.image_state(1), &ImageState::Idle);
        assert!(matches!(session.image_state(2), ImageState::Failed { .. }));
    }

    #[test]
    fn strength_defaults_and_overrides() {
        let mut session = CampaignSession::new();
        assert_eq!(session.strength(0), DEFAULT_INFLUENCE_STRENGTH);
        session.set_strength(0, 0.4);
        assert_eq!(session.strength(0), 0.4);
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = CampaignSession::new();
        session.complete(package());
        session.complete_image(0, "u");
        session.set_strength(0, 0.3);

        session.reset();
        assert_eq!(session.state(), &GenerationState::Idle);
        assert_eq!(session.image_state(0), &ImageState::Idle);
        assert_eq!(session.strength(0), DEFAULT_INFLUENCE_STRENGTH);
    }
}
