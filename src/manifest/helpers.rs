//! Manifest discovery.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::AssetError;

/// Find the manifest named `file_name` by searching from the current
/// directory upwards.
///
/// # Errors
///
/// - The current directory cannot be determined
/// - No manifest exists in the current directory or any parent
pub fn find_manifest(file_name: &str) -> Result<PathBuf> {
    let current = std::env::current_dir()
        .context("Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem")?;
    find_manifest_from(current, file_name)
}

/// Use `explicit_path` if given, otherwise search upwards for `file_name`.
///
/// # Errors
///
/// - Explicit path provided but doesn't exist ([`AssetError::ManifestPathNotFound`])
/// - No explicit path and no manifest found via search
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>, file_name: &str) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(AssetError::ManifestPathNotFound {
                    path: path.display().to_string(),
                }
                .into())
            }
        }
        None => find_manifest(file_name),
    }
}

/// Search `current` and then each parent directory for `file_name`.
///
/// Returns the first match; fails with [`AssetError::ManifestNotFound`] once
/// the filesystem root is passed.
pub fn find_manifest_from(mut current: PathBuf, file_name: &str) -> Result<PathBuf> {
    loop {
        let manifest_path = current.join(file_name);
        if manifest_path.exists() {
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(AssetError::ManifestNotFound {
                name: file_name.to_string(),
            }
            .into());
        }
    }
}
