//! Media source types for image content.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// # Examples
///
/// ```
/// use adforge_core::MediaSource;
///
/// let url = MediaSource::Url("https://example.com/image.png".to_string());
/// let base64 = MediaSource::Base64("iVBORw0KGgo...".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
}

/// A parsed `data:` URL carrying base64 image content.
///
/// Brand assets and reference images travel as data URLs of the form
/// `data:<mime>;base64,<payload>`.
///
/// # Examples
///
/// ```
/// use adforge_core::DataUrl;
///
/// let parsed = DataUrl::parse("data:image/png;base64,iVBORw0KGgo").unwrap();
/// assert_eq!(parsed.mime(), "image/png");
/// assert_eq!(parsed.data(), "iVBORw0KGgo");
/// assert_eq!(parsed.format(), "data:image/png;base64,iVBORw0KGgo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct DataUrl {
    /// MIME type, e.g. "image/jpeg"
    mime: String,
    /// Base64 payload without the header
    data: String,
}

impl DataUrl {
    /// Create a data URL from its parts.
    pub fn new(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` string.
    ///
    /// Returns `None` when the input is not a base64 data URL.
    pub fn parse(input: &str) -> Option<Self> {
        let rest = input.strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime = header.strip_suffix(";base64")?;
        if mime.is_empty() || data.is_empty() {
            return None;
        }
        Some(Self {
            mime: mime.to_string(),
            data: data.to_string(),
        })
    }

    /// Render back into `data:<mime>;base64,<payload>` form.
    pub fn format(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        let url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        let parsed = DataUrl::parse(url).unwrap();
        assert_eq!(parsed.mime(), "image/jpeg");
        assert_eq!(parsed.format(), url);
    }

    #[test]
    fn parse_rejects_plain_url() {
        assert!(DataUrl::parse("https://example.com/image.png").is_none());
    }

    #[test]
    fn parse_rejects_non_base64_data_url() {
        assert!(DataUrl::parse("data:text/plain,hello").is_none());
    }

    #[test]
    fn parse_rejects_empty_payload() {
        assert!(DataUrl::parse("data:image/png;base64,").is_none());
    }
}
