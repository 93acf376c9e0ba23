//! assetgraph - dependency-ordered delivery of web assets
//!
//! A page needs its scripts and stylesheets in an order where every asset
//! comes after the assets it depends on. assetgraph keeps a registry of named
//! assets, each carrying one or more resource values and a list of
//! dependencies, and answers two questions:
//!
//! - In what order must these assets (and everything they need) be delivered?
//! - Where does this resource value live?
//!
//! # Architecture Overview
//!
//! - `assets.toml` declares assets in file order (see [`manifest`])
//! - [`resolver::AssetRegistry`] records them and resolves requests
//! - the `assetgraph` binary (see [`cli`]) prints resolution results, trees
//!   and Graphviz exports
//!
//! Resolution is deterministic: the same registrations and the same request
//! always produce the same order, whatever order the assets were registered
//! in relative to each other.
//!
//! # Core Modules
//!
//! - [`core`] - Asset records, locations and error types
//! - [`resolver`] - The registry, dependency resolution and graph views
//! - [`manifest`] - Manifest parsing and registry construction
//! - [`config`] - Global configuration (`~/.assetgraph/config.toml`)
//! - [`cli`] - Command-line interface
//! - [`logging`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use assetgraph::core::{AssetLocation, Locator};
//! use assetgraph::resolver::AssetRegistry;
//!
//! let mut registry = AssetRegistry::new();
//! registry.add_single_asset(
//!     "jquery",
//!     AssetLocation::Url,
//!     "jquery.js",
//!     Some(Locator::from("https://code.jquery.com/jquery.js")),
//!     Vec::<String>::new(),
//! );
//! registry.add_single_asset("app", AssetLocation::Application, "app.js", None, ["jquery"]);
//!
//! let order: Vec<String> =
//!     registry.resolve_assets(["app"])?.into_iter().map(|asset| asset.value).collect();
//! assert_eq!(order, ["jquery.js", "app.js"]);
//! # Ok::<(), assetgraph::core::AssetError>(())
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! assetgraph resolve app
//! assetgraph lookup jquery.js
//! assetgraph tree
//! assetgraph validate --strict
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod logging;
pub mod manifest;
pub mod resolver;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
