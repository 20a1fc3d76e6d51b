//! Layered configuration: bundled defaults merged with optional user files.
//!
//! Sources, later ones winning:
//! 1. Bundled defaults (compiled in via `include_str!`)
//! 2. `adforge.toml` under the user config directory
//! 3. `adforge.toml` in the working directory
//!
//! API keys are not configuration; they come from the environment
//! (`ANTHROPIC_API_KEY`, `GOOGLE_AI_API_KEY`, `IDEOGRAM_API_KEY`,
//! `FAL_API_KEY`), with `.env` support in the binary.

use adforge_error::{AdforgeResult, ConfigError};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Bundled configuration defaults.
const DEFAULT_CONFIG: &str = include_str!("../adforge.toml");

/// Text generation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextConfig {
    /// Model identifier for package generation
    pub model: String,
    /// Token budget per generation
    pub max_tokens: u32,
    /// Sampling temperature; the provider default when absent
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Image generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    /// Gemini model used for image generation
    pub gemini_model: String,
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct StorageConfig {
    /// Base directory for the profile store; platform data dir when absent
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete adforge configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdforgeConfig {
    /// Text generation settings
    pub text: TextConfig,
    /// Image generation settings
    pub image: ImageConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AdforgeConfig {
    /// Load configuration from bundled defaults and optional user files.
    ///
    /// # Errors
    ///
    /// Returns an error when a user file exists but does not parse, or the
    /// merged configuration is missing required fields.
    pub fn load() -> AdforgeResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("adforge").join("adforge.toml");
            debug!(path = %user_path.display(), "Checking user config");
            builder = builder.add_source(File::from(user_path).required(false));
        }

        builder = builder.add_source(File::with_name("adforge").required(false));

        let merged = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        merged
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)).into())
    }

    /// The profile store directory, defaulting to the platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("adforge")
        })
    }
}

/// Read a required API key from the environment.
///
/// # Errors
///
/// Returns a configuration error naming the missing variable.
pub fn require_env_key(name: &str) -> AdforgeResult<String> {
    std::env::var(name)
        .map_err(|_| ConfigError::new(format!("{} not configured", name)).into())
}
