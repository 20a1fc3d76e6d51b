//! Utilities for extracting the creative package from model responses.
//!
//! The model is instructed to answer with bare JSON, but responses still
//! arrive wrapped in markdown fences or prefixed with prose often enough
//! that extraction has to be tolerant. Strategies are tried in order:
//! fenced ```json blocks, then balanced-delimiter scanning.

use adforge_core::CreativePackage;
use adforge_error::{CreativeError, CreativeErrorKind, CreativeResult};

/// Extract a JSON document from a response that may contain markdown or
/// extra text.
///
/// # Errors
///
/// Returns an error if no JSON document is found in the response.
///
/// # Examples
///
/// ```
/// use adforge_creative::extract_json;
///
/// let response = "Here's the package:\n\
///     \n\
///     ```json\n\
///     {\"hooks\": []}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("hooks"));
/// ```
pub fn extract_json(response: &str) -> CreativeResult<String> {
    // Strategy 1: fenced code blocks
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    // Strategy 2: balanced delimiters, preferring whichever opens first
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    Err(CreativeError::new(CreativeErrorKind::Extraction(format!(
        "response of length {} contains no JSON document. Hint: the prompt must demand JSON-only output.",
        response.len()
    ))))
}

/// Extract content from markdown code blocks.
///
/// Looks for patterns like:
/// - ```language\n...\n```
/// - ``` ... ``` (no language specified)
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let pattern = format!("```{}", language);

    if let Some(start) = response.find(&pattern) {
        let content_start = start + pattern.len();
        if let Some(end) = response[content_start..].find("```") {
            let content = &response[content_start..content_start + end];
            return Some(content.trim().to_string());
        }
        // No closing fence found - likely truncated response
        return Some(response[content_start..].trim().to_string());
    }

    // Try without language specifier
    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip to next newline (in case there's a language specifier)
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        if let Some(end) = response[skip_to..].find("```") {
            let content = &response[skip_to..skip_to + end];
            return Some(content.trim().to_string());
        }
        return Some(response[skip_to..].trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to the
/// matching `close`, handling nesting and string literals correctly.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse extracted JSON into a specific type.
///
/// # Errors
///
/// Returns an error if the JSON string cannot be parsed into type `T`.
pub fn parse_json<T>(json_str: &str) -> CreativeResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview = json_str.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        CreativeError::new(CreativeErrorKind::Parse(format!("{} (JSON: {}...)", e, preview)))
    })
}

/// Extract and parse a creative package from raw model text.
///
/// # Errors
///
/// Returns an error if no JSON is found or the document does not match the
/// package shape.
pub fn parse_package(response: &str) -> CreativeResult<CreativePackage> {
    if response.trim().is_empty() {
        return Err(CreativeError::new(CreativeErrorKind::EmptyResponse));
    }
    let json = extract_json(response)?;
    parse_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_from_code_block() {
        let response = r#"
Here's the package you requested:

```json
{
  "hooks": [],
  "note": "Test"
}
```

Hope this helps!
"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("\"hooks\": []"));
    }

    #[test]
    fn extract_json_balanced_braces() {
        let response = r#"
Sure! Here it is: {"hooks": [], "nested": {"value": "test"}}
"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn extract_json_with_string_escapes() {
        let response = r#"{"text": "She said \"hello\" and {left}"}"#;
        let json = extract_json(response).unwrap();
        assert!(json.contains("She said"));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn extract_json_prefers_array_when_it_opens_first() {
        let response = r#"[{"id": 1}, {"id": 2}] trailing {"ignored": true}"#;
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn no_json_found_is_an_error() {
        let response = "This is just plain text with no JSON";
        assert!(extract_json(response).is_err());
    }

    #[test]
    fn truncated_code_block_still_extracts() {
        let response = "```json\n{\"hooks\": []}";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"hooks\": []}");
    }

    #[test]
    fn parse_package_round_trip() {
        let response = r#"Here you go:
{
  "hooks": [{"text": "t", "technique": "q", "psychologicalTrigger": "p"}],
  "adCopy": {
    "problemAgitateCTA": {"frameworkName": "f", "headline": "h", "body": "b", "cta": "c"},
    "comparison": {"frameworkName": "f", "headline": "h", "body": "b", "cta": "c"},
    "mythBust": {"frameworkName": "f", "headline": "h", "body": "b", "cta": "c"}
  },
  "imagePrompts": [{"purpose": "hero", "prompt": "p", "negativePrompt": "n", "aspectRatio": "1:1"}],
  "layoutSpec": {
    "platformDimensions": "d", "safeZone": "s", "textHierarchy": [],
    "ctaPlacement": "c", "colorUsage": "u", "moodboardKeywords": []
  },
  "abVariants": [{"variantId": "A", "hypothesis": "h", "hook": "k", "differentiator": "d"}]
}"#;
        let package = parse_package(response).unwrap();
        assert_eq!(package.hooks().len(), 1);
        assert_eq!(package.ab_variants().len(), 1);
    }

    #[test]
    fn parse_package_rejects_empty_response() {
        let err = parse_package("   ").unwrap_err();
        assert!(format!("{}", err).contains("empty response"));
    }

    #[test]
    fn parse_package_rejects_wrong_shape() {
        assert!(parse_package(r#"{"hooks": "not-a-list"}"#).is_err());
    }
}
