//! Flux image generation via fal.ai.
//!
//! Two sync endpoints are used: `flux/schnell` for text-to-image and
//! `flux/dev/image-to-image` when a public reference URL is supplied.
//! Base64 references are not supported by the image-to-image route and
//! fall back to text-to-image.

mod client;
mod dto;

pub use client::FluxClient;
pub use dto::{FluxImage, FluxImageToImageRequest, FluxResponse, FluxTextToImageRequest};
