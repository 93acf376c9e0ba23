//! Asset value types shared by the registry, the manifest and the CLI.
//!
//! None of these types are interpreted by the resolver itself. An
//! [`AssetLocation`] is carried from registration through to the resolved
//! [`Asset`] records unchanged, and a [`Locator`] is only ever stored and
//! handed back by [`AssetRegistry::resolve_asset`].
//!
//! [`AssetRegistry::resolve_asset`]: crate::resolver::AssetRegistry::resolve_asset

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::AssetError;

/// Where an asset is served from.
///
/// The tag is supplied by whoever declares the asset and is passed through to
/// the renderer that emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetLocation {
    /// Bundled with the application and served by it.
    Application,
    /// Served by the hosting server, relative to its context path.
    #[default]
    Server,
    /// An absolute external URL.
    Url,
}

impl AssetLocation {
    /// All known locations, in declaration order.
    pub const ALL: [Self; 3] = [Self::Application, Self::Server, Self::Url];

    /// Lowercase name used in manifests and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Server => "server",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetLocation {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|location| location.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AssetError::InvalidLocation {
                value: s.to_string(),
            })
    }
}

/// Concrete address of a resource value.
///
/// Locators come from an external authority (a URL, a classpath entry, a file
/// path) and are opaque to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Wrap an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locator {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Locator {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved asset: one resource value paired with its node's location.
///
/// These are what [`AssetRegistry::resolve_assets`] returns, in delivery
/// order.
///
/// [`AssetRegistry::resolve_assets`]: crate::resolver::AssetRegistry::resolve_assets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Asset {
    /// Location tag of the declaring node.
    pub location: AssetLocation,
    /// Resource value.
    pub value: String,
}

impl Asset {
    /// Pair a location with a resource value.
    pub fn of(location: AssetLocation, value: impl Into<String>) -> Self {
        Self {
            location,
            value: value.into(),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.location)
    }
}
