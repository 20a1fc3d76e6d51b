//! Top-level error wrapper types.

use crate::{
    BackendError, BuilderError, ConfigError, CreativeError, HttpError, JsonError, ModelsError,
    StorageError,
};

/// The foundation error enum aggregating every adforge error domain.
///
/// # Examples
///
/// ```
/// use adforge_error::{AdforgeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: AdforgeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AdforgeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Creative workflow error
    #[from(CreativeError)]
    Creative(CreativeError),
}

/// Adforge error with kind discrimination.
///
/// # Examples
///
/// ```
/// use adforge_error::{AdforgeError, AdforgeResult, ConfigError};
///
/// fn might_fail() -> AdforgeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Adforge Error: {}", _0)]
pub struct AdforgeError(Box<AdforgeErrorKind>);

impl AdforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: AdforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AdforgeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AdforgeErrorKind
impl<T> From<T> for AdforgeError
where
    T: Into<AdforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for adforge operations.
///
/// # Examples
///
/// ```
/// use adforge_error::{AdforgeResult, HttpError};
///
/// fn fetch_data() -> AdforgeResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type AdforgeResult<T> = std::result::Result<T, AdforgeError>;
