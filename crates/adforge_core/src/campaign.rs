//! Saved campaign types.

use crate::{CampaignBrief, CreativePackage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A campaign persisted alongside its generated package.
///
/// At most one campaign is stored per brand; regenerating replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct SavedCampaign {
    /// Owning brand profile
    brand_id: Uuid,
    /// The brief the package was generated from
    brief: CampaignBrief,
    /// The generated package
    package: CreativePackage,
    /// When the campaign was saved
    saved_at: DateTime<Utc>,
}

impl SavedCampaign {
    /// Record a freshly generated package for a brand.
    pub fn new(brand_id: Uuid, brief: CampaignBrief, package: CreativePackage) -> Self {
        Self {
            brand_id,
            brief,
            package,
            saved_at: Utc::now(),
        }
    }

    /// Replace the stored package, refreshing the timestamp.
    pub fn replace_package(&mut self, package: CreativePackage) {
        self.package = package;
        self.saved_at = Utc::now();
    }

    /// Mutable access to the stored package.
    pub fn package_mut(&mut self) -> &mut CreativePackage {
        &mut self.package
    }
}
