//! Filesystem-backed profile store.

use adforge_core::{BrandDna, SavedCampaign};
use adforge_error::{StorageError, StorageErrorKind, StorageResult};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BRANDS_FILE: &str = "brands.json";
const ACTIVE_BRAND_FILE: &str = "active_brand";
const CAMPAIGNS_DIR: &str = "campaigns";

/// Filesystem store for brand profiles and saved campaigns.
///
/// # Examples
///
/// ```no_run
/// use adforge_storage::ProfileStore;
///
/// # async fn demo() -> adforge_error::StorageResult<()> {
/// let store = ProfileStore::new("/var/lib/adforge")?;
/// let brands = store.brands().await?;
/// println!("{} profiles", brands.len());
/// # Ok(())
/// # }
/// ```
pub struct ProfileStore {
    base_path: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at the given directory.
    ///
    /// Creates the base and campaigns directories if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(base_path.join(CAMPAIGNS_DIR)).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened profile store");
        Ok(Self { base_path })
    }

    fn brands_path(&self) -> PathBuf {
        self.base_path.join(BRANDS_FILE)
    }

    fn active_path(&self) -> PathBuf {
        self.base_path.join(ACTIVE_BRAND_FILE)
    }

    fn campaign_path(&self, brand_id: Uuid) -> PathBuf {
        self.base_path
            .join(CAMPAIGNS_DIR)
            .join(format!("{brand_id}.json"))
    }

    /// Write a file atomically via temp file + rename.
    async fn write_atomic(path: &Path, data: &[u8]) -> StorageResult<()> {
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })
    }

    /// Read a file, mapping a missing file to `None`.
    async fn read_optional(path: &Path) -> StorageResult<Option<Vec<u8>>> {
        match tokio::fs::read(path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))),
        }
    }

    /// All stored brand profiles. A missing file reads as an empty list.
    #[tracing::instrument(skip(self))]
    pub async fn brands(&self) -> StorageResult<Vec<BrandDna>> {
        let Some(data) = Self::read_optional(&self.brands_path()).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_slice(&data).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!("brands.json: {}", e)))
        })
    }

    async fn write_brands(&self, brands: &[BrandDna]) -> StorageResult<()> {
        let data = serde_json::to_vec_pretty(brands).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!("brands.json: {}", e)))
        })?;
        Self::write_atomic(&self.brands_path(), &data).await
    }

    /// Save a brand profile, replacing any existing profile with the same id.
    #[tracing::instrument(skip(self, brand), fields(brand_id = %brand.id(), name = %brand.name()))]
    pub async fn save_brand(&self, brand: &BrandDna) -> StorageResult<()> {
        let mut brands = self.brands().await?;
        match brands.iter_mut().find(|b| b.id() == brand.id()) {
            Some(existing) => *existing = brand.clone(),
            None => brands.push(brand.clone()),
        }
        self.write_brands(&brands).await?;
        tracing::info!("Saved brand profile");
        Ok(())
    }

    /// Look up one brand profile by id.
    pub async fn brand(&self, id: Uuid) -> StorageResult<Option<BrandDna>> {
        Ok(self.brands().await?.into_iter().find(|b| *b.id() == id))
    }

    /// Delete a brand profile and its saved campaign.
    ///
    /// When the deleted brand was active, the first remaining brand is
    /// promoted (or the active marker is cleared).
    #[tracing::instrument(skip(self))]
    pub async fn delete_brand(&self, id: Uuid) -> StorageResult<()> {
        let mut brands = self.brands().await?;
        brands.retain(|b| *b.id() != id);
        self.write_brands(&brands).await?;

        if self.active_brand_id().await? == Some(id) {
            self.set_active_brand(brands.first().map(|b| *b.id())).await?;
        }

        self.clear_campaign(id).await?;
        tracing::info!("Deleted brand profile");
        Ok(())
    }

    /// The active brand's id, if any.
    pub async fn active_brand_id(&self) -> StorageResult<Option<Uuid>> {
        let Some(data) = Self::read_optional(&self.active_path()).await? else {
            return Ok(None);
        };
        let text = String::from_utf8_lossy(&data);
        Ok(Uuid::parse_str(text.trim()).ok())
    }

    /// Set or clear the active brand marker.
    #[tracing::instrument(skip(self))]
    pub async fn set_active_brand(&self, id: Option<Uuid>) -> StorageResult<()> {
        match id {
            Some(id) => Self::write_atomic(&self.active_path(), id.to_string().as_bytes()).await,
            None => match tokio::fs::remove_file(self.active_path()).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    self.active_path().display(),
                    e
                )))),
            },
        }
    }

    /// The active brand profile, if one is marked and still exists.
    pub async fn active_brand(&self) -> StorageResult<Option<BrandDna>> {
        match self.active_brand_id().await? {
            Some(id) => self.brand(id).await,
            None => Ok(None),
        }
    }

    /// Import a brand profile from a JSON string and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not describe a brand profile.
    pub async fn import_brand(&self, json: &str) -> StorageResult<BrandDna> {
        let brand: BrandDna = serde_json::from_str(json).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!(
                "brand import: {}",
                e
            )))
        })?;
        self.save_brand(&brand).await?;
        Ok(brand)
    }

    /// Render a brand profile as pretty JSON for export.
    pub fn export_brand(brand: &BrandDna) -> StorageResult<String> {
        serde_json::to_string_pretty(brand).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!(
                "brand export: {}",
                e
            )))
        })
    }

    /// The saved campaign for a brand, if any.
    #[tracing::instrument(skip(self))]
    pub async fn campaign(&self, brand_id: Uuid) -> StorageResult<Option<SavedCampaign>> {
        let Some(data) = Self::read_optional(&self.campaign_path(brand_id)).await? else {
            return Ok(None);
        };
        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Serialization(format!(
                    "campaign {}: {}",
                    brand_id, e
                )))
            })
    }

    /// Save a campaign, replacing the brand's previous one.
    #[tracing::instrument(skip(self, campaign), fields(brand_id = %campaign.brand_id()))]
    pub async fn save_campaign(&self, campaign: &SavedCampaign) -> StorageResult<()> {
        let data = serde_json::to_vec_pretty(campaign).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialization(format!(
                "campaign {}: {}",
                campaign.brand_id(),
                e
            )))
        })?;
        Self::write_atomic(&self.campaign_path(*campaign.brand_id()), &data).await?;
        tracing::info!("Saved campaign");
        Ok(())
    }

    /// Remove a brand's saved campaign. Removing a missing campaign is not
    /// an error.
    #[tracing::instrument(skip(self))]
    pub async fn clear_campaign(&self, brand_id: Uuid) -> StorageResult<()> {
        match tokio::fs::remove_file(self.campaign_path(brand_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.campaign_path(brand_id).display(),
                e
            )))),
        }
    }
}
