//! Ideogram image generation integration.
//!
//! A single call to the generate endpoint with the prompt wrapped in an
//! `image_request` envelope. Aspect-ratio strings are translated into
//! Ideogram's `ASPECT_*` constants and the first returned URL is the result.

mod client;
mod dto;

pub use client::IdeogramClient;
pub use dto::{IdeogramImage, IdeogramImageRequest, IdeogramRequest, IdeogramResponse};
