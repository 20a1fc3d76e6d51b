//! Model provider errors.

/// Anthropic-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AnthropicErrorKind {
    /// Request failed before reaching the API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse the API response
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Error converting between adforge and Anthropic types
    #[display("Conversion error: {}", _0)]
    ConversionError(String),

    /// Response contained no text content block
    #[display("Response contained no text content")]
    MissingText,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Ideogram-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IdeogramErrorKind {
    /// Request failed before reaching the API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse the API response
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Response carried no image URL
    #[display("No image URL in Ideogram response")]
    MissingUrl,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Flux (fal.ai) specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FluxErrorKind {
    /// Request failed before reaching the API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse the API response
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Response carried no image URL
    #[display("No image URL in Flux response")]
    MissingUrl,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Gemini image generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GeminiImageErrorKind {
    /// Request failed before reaching the API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse the API response
    #[display("Parse error: {}", _0)]
    Parse(String),

    /// Response contained no inline image data
    #[display("Gemini returned no image")]
    NoImage,

    /// Builder error when constructing requests
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Anthropic-specific error
    #[display("Anthropic: {}", _0)]
    Anthropic(AnthropicErrorKind),

    /// Ideogram-specific error
    #[display("Ideogram: {}", _0)]
    Ideogram(IdeogramErrorKind),

    /// Flux-specific error
    #[display("Flux: {}", _0)]
    Flux(FluxErrorKind),

    /// Gemini image generation error
    #[display("Gemini: {}", _0)]
    GeminiImage(GeminiImageErrorKind),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
