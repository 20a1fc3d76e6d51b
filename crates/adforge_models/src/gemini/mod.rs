//! Gemini image generation integration.
//!
//! A single `generateContent` call with `responseModalities = ["IMAGE"]`.
//! The negative prompt and target aspect ratio are folded into the text
//! part (the endpoint takes no dedicated fields for them), an optional
//! base64 reference image leads the parts list, and the returned inline
//! image is normalized into a `data:` URL.

mod client;
mod dto;

pub use client::GeminiImageClient;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiGenerateRequest, GeminiGenerateResponse,
    GeminiGenerationConfig, GeminiInlineData, GeminiPart,
};
