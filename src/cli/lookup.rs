//! Print the locator registered for a resource value.
//!
//! ```bash
//! assetgraph lookup jquery.js
//! ```

use anyhow::Result;
use clap::Args;

use crate::cli::common::ProjectContext;
use crate::core::AssetError;
use crate::resolver::AssetRegistry;

/// Command to look up the locator of a single resource value.
#[derive(Args, Debug)]
pub struct LookupCommand {
    /// Resource value as it appears in the manifest
    value: String,
}

impl LookupCommand {
    pub fn execute(self, project: &ProjectContext) -> Result<()> {
        println!("{}", self.render(&project.registry)?);
        Ok(())
    }

    fn render(&self, registry: &AssetRegistry) -> Result<String, AssetError> {
        registry.resolve_asset(&self.value).map(ToString::to_string).ok_or_else(|| {
            AssetError::Other {
                message: format!("No locator registered for '{}'", self.value),
            }
        })
    }
}
