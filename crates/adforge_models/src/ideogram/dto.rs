//! Ideogram API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inner request payload for the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct IdeogramImageRequest {
    /// The generation prompt
    prompt: String,
    /// What the generator should avoid; omitted when empty
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    negative_prompt: Option<String>,
    /// Ideogram aspect constant (e.g. "ASPECT_1_1")
    aspect_ratio: String,
    /// Model version
    #[builder(default = "\"V_2\".to_string()")]
    model: String,
    /// Magic prompt behavior
    #[builder(default = "\"AUTO\".to_string()")]
    magic_prompt_option: String,
}

impl IdeogramImageRequest {
    /// Creates a new builder for `IdeogramImageRequest`.
    pub fn builder() -> IdeogramImageRequestBuilder {
        IdeogramImageRequestBuilder::default()
    }
}

/// Top-level request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct IdeogramRequest {
    /// The wrapped image request
    image_request: IdeogramImageRequest,
}

impl IdeogramRequest {
    /// Wrap an image request in the envelope.
    pub fn new(image_request: IdeogramImageRequest) -> Self {
        Self { image_request }
    }
}

/// One generated image in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct IdeogramImage {
    /// Hosted URL of the generated image
    #[serde(default)]
    url: Option<String>,
}

/// Response from the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct IdeogramResponse {
    /// Generated images
    #[serde(default)]
    data: Vec<IdeogramImage>,
}

impl IdeogramResponse {
    /// The first generated image's URL, if any.
    pub fn first_url(&self) -> Option<&str> {
        self.data.first().and_then(|image| image.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_negative_prompt_is_omitted() {
        let request = IdeogramRequest::new(
            IdeogramImageRequest::builder()
                .prompt("a mug")
                .aspect_ratio("ASPECT_1_1")
                .build()
                .unwrap(),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert!(json["image_request"].get("negative_prompt").is_none());
        assert_eq!(json["image_request"]["model"], "V_2");
        assert_eq!(json["image_request"]["magic_prompt_option"], "AUTO");
    }

    #[test]
    fn response_first_url() {
        let body = r#"{"data": [{"url": "https://ideogram.ai/img/1.png"}]}"#;
        let response: IdeogramResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_url(), Some("https://ideogram.ai/img/1.png"));

        let empty: IdeogramResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(empty.first_url(), None);
    }
}
