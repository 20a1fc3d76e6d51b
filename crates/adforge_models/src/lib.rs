//! Model provider integrations for adforge.
//!
//! One module per backend:
//! - [`anthropic`] — text generation for the creative package
//! - [`gemini`] — Gemini image generation (inline image responses)
//! - [`ideogram`] — Ideogram image generation (hosted URLs)
//! - [`flux`] — Flux via fal.ai (text-to-image and image-to-image)
//!
//! Every client converts the crate's normalized request types into the
//! provider wire shape, checks HTTP status before parsing, and normalizes
//! the response back into the crate's types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod anthropic;
pub mod flux;
pub mod gemini;
pub mod ideogram;

pub use anthropic::AnthropicClient;
pub use flux::FluxClient;
pub use gemini::GeminiImageClient;
pub use ideogram::IdeogramClient;
