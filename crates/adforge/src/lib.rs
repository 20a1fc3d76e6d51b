//! Ad creative package generation over multi-provider model APIs.
//!
//! This facade crate re-exports the adforge workspace and carries the CLI
//! binary. The pieces:
//!
//! - [`adforge_core`] — brand/campaign data model and generation primitives
//! - [`adforge_interface`] — driver traits at the provider seams
//! - [`adforge_models`] — Anthropic, Gemini, Ideogram, and Flux clients
//! - [`adforge_creative`] — prompts, extraction, refinement, routing
//! - [`adforge_storage`] — filesystem profile store
//! - [`adforge_error`] — aggregated error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use adforge_core::*;
pub use adforge_creative::{
    CampaignSession, CreativeStudio, GenerationState, ImageRouter, ImageState,
    DEFAULT_INFLUENCE_STRENGTH,
};
pub use adforge_error::{AdforgeError, AdforgeErrorKind, AdforgeResult};
pub use adforge_interface::{CreativeDriver, ImageDriver};
pub use adforge_models::{AnthropicClient, FluxClient, GeminiImageClient, IdeogramClient};
pub use adforge_storage::ProfileStore;
pub use config::{require_env_key, AdforgeConfig, ImageConfig, StorageConfig, TextConfig};
