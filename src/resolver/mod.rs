//! Asset dependency resolution.
//!
//! This module owns the asset graph: an [`AssetRegistry`] of [`AssetNode`]s
//! keyed by id, and the algorithm that turns a set of requested ids into the
//! ordered list of resources a page or bundle must load.
//!
//! # Architecture Overview
//!
//! - **Registration** ([`AssetRegistry::add_asset`]): each new node is linked
//!   against every node already registered. Whichever registration sees both
//!   ends of an edge records it on both sides, so the final graph does not
//!   depend on registration order.
//! - **Resolution** ([`AssetRegistry::resolve_assets`]): breadth-first closure
//!   in discovery order, then elimination that always takes the first ready
//!   asset. Same registry and same request give the same order.
//! - **Lookup** ([`AssetRegistry::resolve_asset`]): resource value to locator.
//! - **Inspection** ([`DependencyGraph`]): tree and DOT renderings of the
//!   declared edges.
//!
//! # Example
//!
//! ```rust
//! use assetgraph::core::{AssetLocation, Locator};
//! use assetgraph::resolver::AssetRegistry;
//!
//! let mut registry = AssetRegistry::new();
//! registry.add_single_asset("app", AssetLocation::Application, "js/app.js", None, ["jquery"]);
//! registry.add_single_asset(
//!     "jquery",
//!     AssetLocation::Url,
//!     "jquery.js",
//!     Some(Locator::from("https://code.jquery.com/jquery.js")),
//!     Vec::<String>::new(),
//! );
//!
//! let order: Vec<String> =
//!     registry.resolve_assets(["app"])?.into_iter().map(|asset| asset.value).collect();
//! assert_eq!(order, vec!["jquery.js", "js/app.js"]);
//! # Ok::<(), assetgraph::core::AssetError>(())
//! ```
//!
//! # Errors
//!
//! Resolution is all-or-nothing: it either returns the full order or fails
//! with [`AssetError::UnresolvableAssetId`] or
//! [`AssetError::UnsatisfiableDependencies`].
//!
//! [`AssetError::UnresolvableAssetId`]: crate::core::AssetError::UnresolvableAssetId
//! [`AssetError::UnsatisfiableDependencies`]: crate::core::AssetError::UnsatisfiableDependencies

mod asset_node;
mod asset_registry;
pub mod dependency_graph;


pub use asset_node::AssetNode;
pub use asset_registry::AssetRegistry;
pub use dependency_graph::{DependencyGraph, DependencyNode};
