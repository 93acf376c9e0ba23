//! Graph views of a registry for inspection.
//!
//! [`DependencyGraph`] snapshots the declared edges of an [`AssetRegistry`]
//! into a `petgraph` graph so they can be rendered as a tree or exported to
//! Graphviz. Declared dependencies that were never registered become nodes
//! flagged as unresolved, so dangling references show up in the output
//! instead of disappearing.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::resolver::AssetRegistry;

/// A node in the dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyNode {
    /// Asset id.
    pub id: String,
    /// Whether an asset with this id is registered.
    pub registered: bool,
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.registered {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} (unresolved)", self.id)
        }
    }
}

/// Edge weight: the source node depends on the target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependsOn;

impl fmt::Display for DependsOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("depends on")
    }
}

/// Snapshot of a registry's declared edges.
pub struct DependencyGraph {
    graph: DiGraph<DependencyNode, DependsOn>,
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Build the graph from every registered asset, in registration order.
    pub fn from_registry(registry: &AssetRegistry) -> Self {
        let mut graph = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        };

        for node in registry.nodes() {
            graph.ensure_node(node.id(), true);
        }
        for node in registry.nodes() {
            for dependency in node.i_depend_on() {
                let registered = registry.contains(dependency);
                graph.add_dependency(node.id(), dependency, registered);
            }
        }

        graph
    }

    fn ensure_node(&mut self, id: &str, registered: bool) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            index
        } else {
            let index = self.graph.add_node(DependencyNode {
                id: id.to_string(),
                registered,
            });
            self.node_map.insert(id.to_string(), index);
            index
        }
    }

    fn add_dependency(&mut self, from: &str, to: &str, registered: bool) {
        let from_idx = self.ensure_node(from, true);
        let to_idx = self.ensure_node(to, registered);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, DependsOn);
        }
    }

    /// Direct dependencies of `id`, in declaration order.
    pub fn get_direct_deps(&self, id: &str) -> Vec<&DependencyNode> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };
        // petgraph yields the most recently added edge first
        let mut deps: Vec<&DependencyNode> =
            self.graph.neighbors(index).map(|neighbor| &self.graph[neighbor]).collect();
        deps.reverse();
        deps
    }

    pub fn node(&self, id: &str) -> Option<&DependencyNode> {
        self.node_map.get(id).map(|&index| &self.graph[index])
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render the graph in Graphviz DOT format.
    ///
    /// Edges point from an asset to the assets it depends on.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[Config::EdgeNoLabel]))
    }

    /// Human-readable dependency tree rooted at `root`.
    ///
    /// Nodes already printed on the current path are marked as circular and
    /// not expanded again.
    pub fn to_tree_string(&self, root: &str) -> String {
        let mut result = String::new();
        let root_node = self.node(root).cloned().unwrap_or(DependencyNode {
            id: root.to_string(),
            registered: false,
        });
        result.push_str(&format!("{root_node}\n"));

        let mut visiting = HashSet::from([root.to_string()]);
        let deps = self.get_direct_deps(root);
        for (i, dep) in deps.iter().enumerate() {
            self.build_tree_string(dep, &mut result, "", i == deps.len() - 1, &mut visiting);
        }
        result
    }

    fn build_tree_string(
        &self,
        node: &DependencyNode,
        result: &mut String,
        prefix: &str,
        is_last: bool,
        visiting: &mut HashSet<String>,
    ) {
        let connector = if is_last {
            "└── "
        } else {
            "├── "
        };
        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        if !visiting.insert(node.id.clone()) {
            result.push_str(&format!("{prefix}{connector}{node} (circular reference)\n"));
            return;
        }
        result.push_str(&format!("{prefix}{connector}{node}\n"));

        let deps = self.get_direct_deps(&node.id);
        for (i, dep) in deps.iter().enumerate() {
            self.build_tree_string(dep, result, &child_prefix, i == deps.len() - 1, visiting);
        }

        visiting.remove(&node.id);
    }
}
