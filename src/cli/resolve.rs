//! Print the delivery order for a set of assets.
//!
//! ```bash
//! assetgraph resolve app
//! assetgraph resolve app admin --locators
//! assetgraph resolve app --format json
//! ```
//!
//! Text output is one resolved record per line, `location<TAB>value`, in the
//! order the assets must be loaded.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::common::{OutputFormat, ProjectContext};
use crate::core::{AssetLocation, Locator};
use crate::resolver::AssetRegistry;

/// Command to resolve assets into load order.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Asset ids to resolve; duplicates are ignored
    #[arg(required = true)]
    ids: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Append the registered locator of each value (text format)
    #[arg(long)]
    locators: bool,
}

#[derive(Debug, Serialize)]
struct ResolvedEntry<'a> {
    location: AssetLocation,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    locator: Option<&'a Locator>,
}

impl ResolveCommand {
    pub fn execute(self, project: &ProjectContext) -> Result<()> {
        print!("{}", self.render(&project.registry)?);
        Ok(())
    }

    fn render(&self, registry: &AssetRegistry) -> Result<String> {
        let resolved = registry
            .resolve_assets(&self.ids)
            .with_context(|| format!("Failed to resolve assets: {}", self.ids.join(", ")))?;
        tracing::debug!("Resolved {} record(s)", resolved.len());

        let entries: Vec<ResolvedEntry<'_>> = resolved
            .into_iter()
            .map(|asset| ResolvedEntry {
                locator: registry.resolve_asset(&asset.value),
                location: asset.location,
                value: asset.value,
            })
            .collect();

        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?)),
            OutputFormat::Text => Ok(entries
                .iter()
                .map(|entry| {
                    if self.locators {
                        let locator = entry.locator.map_or("-", Locator::as_str);
                        format!("{}\t{}\t{}\n", entry.location, entry.value, locator)
                    } else {
                        format!("{}\t{}\n", entry.location, entry.value)
                    }
                })
                .collect()),
        }
    }
}
