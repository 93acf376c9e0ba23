//! Export the dependency graph in Graphviz DOT format.
//!
//! ```bash
//! assetgraph graph | dot -Tsvg > assets.svg
//! ```

use anyhow::Result;
use clap::Args;

use crate::cli::common::ProjectContext;
use crate::resolver::DependencyGraph;

#[derive(Args, Debug)]
pub struct GraphCommand {}

impl GraphCommand {
    pub fn execute(self, project: &ProjectContext) -> Result<()> {
        let graph = DependencyGraph::from_registry(&project.registry);
        tracing::debug!("Graph has {} node(s) and {} edge(s)", graph.node_count(), graph.edge_count());
        print!("{}", graph.to_dot());
        Ok(())
    }
}
