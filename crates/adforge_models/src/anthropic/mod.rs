//! Anthropic Messages API integration.
//!
//! The creative package is generated by a single call to the messages
//! endpoint: brand persona in the `system` field, labeled brand-asset and
//! reference images as base64 image blocks, and the campaign prompt as the
//! final text block.

mod client;
mod dto;

pub use client::AnthropicClient;
pub use dto::{
    AnthropicContentBlock, AnthropicImageSource, AnthropicMessage, AnthropicRequest,
    AnthropicResponse, AnthropicResponseBlock,
};
