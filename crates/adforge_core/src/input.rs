//! Input types for generation requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Supported input types for text-generation requests.
///
/// # Examples
///
/// ```
/// use adforge_core::{Input, MediaSource};
///
/// // Text input
/// let text = Input::Text("Generate a hook".to_string());
///
/// // Image input with base64 content
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo...".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, GIF).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL or base64)
        source: MediaSource,
    },
}
