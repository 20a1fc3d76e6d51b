//! Filesystem persistence for brand profiles and saved campaigns.
//!
//! The store keeps a single JSON document per concern under a base
//! directory:
//!
//! ```text
//! {base}/
//! ├── brands.json              (the full brand list)
//! ├── active_brand             (active brand id, plain text)
//! └── campaigns/
//!     └── {brand-id}.json      (at most one campaign per brand)
//! ```
//!
//! Missing files read as empty/none rather than erroring, and every write
//! goes through a temp file + rename for atomicity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod profiles;

pub use profiles::ProfileStore;
