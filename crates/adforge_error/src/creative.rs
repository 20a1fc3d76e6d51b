//! Creative workflow error types.

/// Specific error conditions for creative package operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CreativeErrorKind {
    /// No JSON document found in the model response
    #[display("No JSON found in model response: {}", _0)]
    Extraction(String),

    /// JSON found but it does not parse into a creative package
    #[display("Failed to parse creative package: {}", _0)]
    Parse(String),

    /// The model returned no text output at all
    #[display("Model returned an empty response")]
    EmptyResponse,

    /// No image driver registered for the requested provider
    #[display("No image driver registered for provider '{}'", _0)]
    UnknownProvider(String),

    /// Image prompt index out of range for the package
    #[display("Image prompt index {} out of range ({} prompts)", index, len)]
    PromptIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of image prompts in the package
        len: usize,
    },
}

/// Error type for creative workflow operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Creative Error: {} at line {} in {}", kind, line, file)]
pub struct CreativeError {
    /// The kind of error that occurred
    pub kind: CreativeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CreativeError {
    /// Create a new creative error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CreativeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CreativeErrorKind {
        &self.kind
    }
}

/// Result type for creative workflow operations.
pub type CreativeResult<T> = Result<T, CreativeError>;
