//! Gemini generateContent data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline base64 media payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    /// MIME type of the payload
    mime_type: String,
    /// Base64 payload
    data: String,
}

impl GeminiInlineData {
    /// Create an inline payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One part of a content entry: text or inline media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    text: Option<String>,
    /// Inline media content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

impl GeminiPart {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-media part.
    pub fn inline(data: GeminiInlineData) -> Self {
        Self {
            text: None,
            inline_data: Some(data),
        }
    }
}

/// A content entry carrying a role and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiContent {
    /// Role, "user" on requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// A user-role content entry.
    pub fn user(parts: Vec<GeminiPart>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }
}

/// Generation tuning for the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Requested response modalities
    response_modalities: Vec<String>,
}

impl GeminiGenerationConfig {
    /// Request image-only responses.
    pub fn image_only() -> Self {
        Self {
            response_modalities: vec!["IMAGE".to_string()],
        }
    }
}

/// generateContent request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,
    /// Generation tuning
    generation_config: GeminiGenerationConfig,
}

impl GeminiGenerateRequest {
    /// A single-user-turn image request.
    pub fn image_request(parts: Vec<GeminiPart>) -> Self {
        Self {
            contents: vec![GeminiContent::user(parts)],
            generation_config: GeminiGenerationConfig::image_only(),
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Candidate content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<GeminiContent>,
}

/// generateContent response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerateResponse {
    /// Response candidates
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiGenerateResponse {
    /// The first inline-data part across the first candidate's parts.
    pub fn first_inline_data(&self) -> Option<&GeminiInlineData> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| {
                content
                    .parts
                    .iter()
                    .find_map(|part| part.inline_data.as_ref())
            })
    }
}
