//! Global configuration (`~/.assetgraph/config.toml`).
//!
//! Holds user-wide defaults that would otherwise have to be repeated in every
//! manifest or on every command line.
//!
//! # Location
//!
//! - **Unix/macOS**: `~/.assetgraph/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\assetgraph\config.toml`
//!
//! The `ASSETGRAPH_CONFIG` environment variable (set by `--config`) overrides
//! both. A missing file is not an error; defaults are used.
//!
//! # File Format
//!
//! ```toml
//! # Location for [[assets]] entries that do not declare one
//! default_location = "application"
//!
//! # Manifest file name searched for in the current directory and its parents
//! manifest_name = "web-assets.toml"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::config::parse_config;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, MANIFEST_FILE_NAME};
use crate::core::AssetLocation;

/// User-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Location applied to manifest entries without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<AssetLocation>,

    /// Manifest file name used for discovery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
}

impl GlobalConfig {
    /// Load from the default location, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// - The default path cannot be determined
    /// - The file exists but cannot be read or parsed
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A file that does not exist yields the default configuration.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No global config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// - The file cannot be read
    /// - The file is not valid TOML for this structure
    pub async fn load_from(path: &Path) -> Result<Self> {
        parse_config(path)
            .await
            .with_context(|| format!("Failed to load global config from {}", path.display()))
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write global config to {}", path.display()))
    }

    /// Path of the global configuration file.
    ///
    /// `ASSETGRAPH_CONFIG` wins over the platform location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home (or local data) directory is unknown.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("assetgraph")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(CONFIG_DIR_NAME)
        };

        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Location used for manifest entries that do not declare one.
    pub fn location(&self) -> AssetLocation {
        self.default_location.unwrap_or_default()
    }

    /// Manifest file name to search for.
    pub fn manifest_name(&self) -> &str {
        self.manifest_name.as_deref().unwrap_or(MANIFEST_FILE_NAME)
    }
}
