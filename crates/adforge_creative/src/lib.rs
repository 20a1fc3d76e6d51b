//! Creative package workflow engine.
//!
//! This crate turns a brand profile and campaign brief into a generated
//! [`CreativePackage`](adforge_core::CreativePackage) and back again through
//! the refinement loop:
//!
//! 1. [`prompts`] renders the system persona, campaign prompt, and
//!    refinement prompt.
//! 2. [`assembly`] folds brand assets and reference images into a single
//!    multimodal request.
//! 3. [`CreativeStudio`] drives a text backend and parses the response via
//!    [`extraction`].
//! 4. [`ImageRouter`] dispatches approved image prompts to a registered
//!    image backend.
//! 5. [`CampaignSession`] tracks workflow and per-image render state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod extraction;
mod prompts;
mod router;
mod session;
mod studio;

pub use assembly::{assemble_generate, assemble_refine};
pub use extraction::{extract_json, parse_json, parse_package};
pub use prompts::{refinement_prompt, system_prompt, user_prompt};
pub use router::ImageRouter;
pub use session::{CampaignSession, GenerationState, ImageState, DEFAULT_INFLUENCE_STRENGTH};
pub use studio::CreativeStudio;
