//! Display the dependency tree of assets.
//!
//! ```bash
//! assetgraph tree            # every asset nothing else depends on
//! assetgraph tree app admin  # specific roots
//! ```
//!
//! Example output:
//!
//! ```text
//! app
//! ├── jquery
//! └── ui
//!     └── jquery
//! ```

use anyhow::Result;
use clap::Args;

use crate::cli::common::ProjectContext;
use crate::core::AssetError;
use crate::resolver::{AssetRegistry, DependencyGraph};

/// Command to print dependency trees.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Root asset ids (defaults to every asset no other asset depends on)
    ids: Vec<String>,
}

impl TreeCommand {
    pub fn execute(self, project: &ProjectContext) -> Result<()> {
        print!("{}", self.render(&project.registry)?);
        Ok(())
    }

    fn render(&self, registry: &AssetRegistry) -> Result<String, AssetError> {
        if let Some(unknown) = self.ids.iter().find(|id| !registry.contains(id)) {
            return Err(AssetError::UnresolvableAssetId {
                id: unknown.clone(),
            });
        }

        let roots: Vec<&str> = if self.ids.is_empty() {
            registry
                .nodes()
                .filter(|node| node.depends_on_me().iter().all(|dependent| dependent == node.id()))
                .map(|node| node.id())
                .collect()
        } else {
            self.ids.iter().map(String::as_str).collect()
        };

        if roots.is_empty() && !registry.is_empty() {
            tracing::warn!("Every asset is depended on by another asset; no roots to display");
        }

        let graph = DependencyGraph::from_registry(registry);
        Ok(roots.iter().map(|root| graph.to_tree_string(root)).collect::<Vec<_>>().join("\n"))
    }
}
