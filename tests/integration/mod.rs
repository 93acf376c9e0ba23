//! Integration test suite for assetgraph
//!
//! End-to-end tests that run the `assetgraph` binary against manifests in
//! temporary directories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **config**: Global configuration loading and the `config` command
//! - **errors**: Error reporting and exit codes
//! - **lookup**: Locator lookup
//! - **resolve**: Delivery ordering
//! - **tree_graph**: Tree and DOT output
//! - **validate**: Manifest validation

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config;
mod errors;
mod lookup;
mod resolve;
mod tree_graph;
mod validate;
