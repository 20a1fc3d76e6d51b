//! Core data types for the adforge creative generation library.
//!
//! This crate provides the brand/campaign data model, the creative package
//! shape parsed from model output, and the generation primitives used at the
//! provider seams.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brand;
mod brief;
mod campaign;
mod feedback;
mod image;
mod input;
mod media;
mod message;
mod package;
mod platform;
mod request;
mod role;

pub use brand::{BrandAssets, BrandDna, BrandDnaBuilder, SophisticationLevel};
pub use brief::{CampaignBrief, CampaignBriefBuilder, Objective, ReferenceImages};
pub use campaign::SavedCampaign;
pub use feedback::{RefinementRequest, SectionFeedback};
pub use image::{GeneratedImage, ImageProvider, ImageRequest, ImageRequestBuilder};
pub use input::Input;
pub use media::{DataUrl, MediaSource};
pub use message::Message;
pub use package::{
    AbVariant, AdCopyBlock, AdCopySet, CreativePackage, Hook, ImagePrompt, ImagePurpose,
    LayoutSpec, VariantId,
};
pub use platform::{AdSize, Platform, SafeZone};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, Output};
pub use role::Role;
