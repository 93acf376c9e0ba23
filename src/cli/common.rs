//! Shared plumbing for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::manifest::{Manifest, find_manifest_with_optional};
use crate::resolver::AssetRegistry;

/// Output format for commands that support machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// A loaded manifest and the registry built from it.
pub struct ProjectContext {
    /// Path of the manifest that was loaded.
    pub manifest_path: PathBuf,
    /// Registry populated from the manifest, in file order.
    pub registry: AssetRegistry,
    /// Ids declared more than once; only the first declaration was kept.
    pub duplicates: Vec<String>,
}

impl ProjectContext {
    /// Locate, load and register the manifest.
    ///
    /// An explicit `manifest_path` must exist; otherwise the configured
    /// manifest name is searched for from the current directory upwards.
    pub async fn load(manifest_path: Option<PathBuf>, config: &GlobalConfig) -> Result<Self> {
        let manifest_path = find_manifest_with_optional(manifest_path, config.manifest_name())?;

        let manifest = Manifest::load(&manifest_path).await?;
        let (registry, duplicates) = manifest.build_registry(config.location())?;
        tracing::info!(
            "Registered {} asset(s) from {}",
            registry.len(),
            manifest_path.display()
        );

        Ok(Self {
            manifest_path,
            registry,
            duplicates,
        })
    }
}
