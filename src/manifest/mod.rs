//! Asset manifest (`assets.toml`) parsing and registry construction.
//!
//! The manifest declares assets as an ordered array of tables. Order matters:
//! assets are registered in file order (the first declaration of an id wins)
//! and resources are delivered in the order they are listed.
//!
//! # Format
//!
//! ```toml
//! # Single resource shorthand
//! [[assets]]
//! id = "jquery"
//! location = "url"
//! value = "https://code.jquery.com/jquery-3.7.1.min.js"
//!
//! # Several resources, delivered in this order
//! [[assets]]
//! id = "app"
//! location = "application"
//! depends = ["jquery"]
//!
//! [[assets.resources]]
//! value = "js/app.js"
//! url = "/static/js/app.js"
//!
//! [[assets.resources]]
//! value = "css/app.css"
//!
//! # No id: derived from the value ("widgets.js")
//! [[assets]]
//! value = "js/lib/widgets.js"
//! depends = ["app"]
//! ```
//!
//! `location` is optional and falls back to the configured default
//! (`server` unless overridden in the global config). `url` is the locator
//! returned by `assetgraph lookup`; a resource without one still takes part
//! in ordering.

mod helpers;


pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{AssetError, AssetLocation, Locator};
use crate::resolver::AssetRegistry;

/// Parsed asset manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Declarations in file order.
    #[serde(default)]
    pub assets: Vec<AssetDeclaration>,
}

/// One `[[assets]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetDeclaration {
    /// Asset id; derived from the first resource value when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<AssetLocation>,

    /// Shorthand for a single leading resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Locator for `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Additional resources, after `value` if both are given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceDeclaration>,

    /// Ids this asset depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
}

/// One `[[assets.resources]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDeclaration {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Derive an asset id from a resource value: the longest trailing substring
/// containing no `/`.
///
/// ```rust
/// use assetgraph::manifest::derive_asset_id;
///
/// assert_eq!(derive_asset_id("js/lib/widgets.js"), "widgets.js");
/// assert_eq!(derive_asset_id("app.css"), "app.css");
/// ```
pub fn derive_asset_id(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

impl AssetDeclaration {
    /// Resource values with their locators, in delivery order.
    pub fn resource_entries(&self) -> Vec<(String, Option<Locator>)> {
        let shorthand =
            self.value.iter().map(|value| (value.clone(), self.url.as_deref().map(Locator::from)));
        let listed = self
            .resources
            .iter()
            .map(|resource| (resource.value.clone(), resource.url.as_deref().map(Locator::from)));
        shorthand.chain(listed).collect()
    }

    /// The declared id, or the id derived from the first resource value.
    pub fn effective_id(&self) -> Option<String> {
        self.id.clone().or_else(|| {
            self.value
                .as_deref()
                .or_else(|| self.resources.first().map(|resource| resource.value.as_str()))
                .map(|value| derive_asset_id(value).to_string())
        })
    }

    fn validate(&self, index: usize) -> Result<(), AssetError> {
        let id = self.effective_id().unwrap_or_else(|| format!("#{}", index + 1));
        let invalid = |reason: &str| AssetError::InvalidAsset {
            id: id.clone(),
            reason: reason.to_string(),
        };

        if self.value.is_none() && self.resources.is_empty() {
            return Err(invalid("declares no resource values"));
        }
        if self.value.is_none() && self.url.is_some() {
            return Err(invalid("'url' requires 'value'"));
        }
        if self.effective_id().is_none_or(|id| id.trim().is_empty()) {
            return Err(invalid("asset id is empty"));
        }
        if self.resource_entries().iter().any(|(value, _)| value.is_empty()) {
            return Err(invalid("resource values must not be empty"));
        }
        Ok(())
    }
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest content. `file` names the source in error messages.
    ///
    /// # Errors
    ///
    /// [`AssetError::ManifestParseError`] for invalid TOML or unknown fields.
    pub fn from_toml_str(content: &str, file: &str) -> Result<Self, AssetError> {
        toml::from_str(content).map_err(|e| AssetError::ManifestParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read, parse and validate a manifest file.
    ///
    /// # Errors
    ///
    /// - The file cannot be read
    /// - The content is not a valid manifest
    /// - A declaration fails [`validate`](Self::validate)
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

        let manifest = Self::from_toml_str(&content, &path.display().to_string())?;
        manifest
            .validate()
            .with_context(|| format!("Invalid manifest file: {}", path.display()))?;

        tracing::debug!("Loaded {} asset declaration(s) from {}", manifest.assets.len(), path.display());
        Ok(manifest)
    }

    /// Check every declaration has an id and at least one resource value.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidAsset`] for the first malformed declaration.
    pub fn validate(&self) -> Result<(), AssetError> {
        self.assets.iter().enumerate().try_for_each(|(index, asset)| asset.validate(index))
    }

    /// Register every declaration, in file order, into a new registry.
    ///
    /// Declarations without a `location` use `default_location`. Duplicate ids
    /// are skipped with a warning and returned alongside the registry.
    ///
    /// # Errors
    ///
    /// [`AssetError::InvalidAsset`] if a declaration has no usable id.
    pub fn build_registry(
        &self,
        default_location: AssetLocation,
    ) -> Result<(AssetRegistry, Vec<String>), AssetError> {
        let mut registry = AssetRegistry::new();
        let mut duplicates = Vec::new();

        for (index, asset) in self.assets.iter().enumerate() {
            let id = asset.effective_id().ok_or_else(|| AssetError::InvalidAsset {
                id: format!("#{}", index + 1),
                reason: "asset id is empty".to_string(),
            })?;
            let location = asset.location.unwrap_or(default_location);

            match registry.try_add_asset(
                id,
                location,
                asset.resource_entries(),
                asset.depends.iter().cloned(),
            ) {
                Ok(()) => {}
                Err(AssetError::DuplicateAssetId { id }) => {
                    tracing::warn!("Ignoring duplicate declaration of asset '{id}'");
                    duplicates.push(id);
                }
                Err(e) => return Err(e),
            }
        }

        Ok((registry, duplicates))
    }
}
