//! Trait definitions for adforge model backends.
//!
//! Two seams exist: text generation (the creative package) and image
//! generation (rendering approved image prompts). Both traits are
//! object-safe so drivers can be boxed and routed at runtime.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CreativeDriver, ImageDriver};
