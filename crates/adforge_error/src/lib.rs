//! Error types for the adforge library.
//!
//! This crate provides the foundation error types used throughout the adforge
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use adforge_error::{AdforgeResult, HttpError};
//!
//! fn fetch_data() -> AdforgeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod backend;
mod builder;
mod storage;
mod models;
mod creative;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use backend::BackendError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use storage::{StorageError, StorageErrorKind, StorageResult};
pub use models::{
    AnthropicErrorKind, FluxErrorKind, GeminiImageErrorKind, IdeogramErrorKind, ModelsError,
    ModelsErrorKind, ModelsResult,
};
pub use creative::{CreativeError, CreativeErrorKind, CreativeResult};
pub use error::{AdforgeError, AdforgeErrorKind, AdforgeResult};
