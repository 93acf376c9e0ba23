//! Configuration management for assetgraph
//!
//! Two layers feed a run:
//!
//! 1. **Global configuration** (`~/.assetgraph/config.toml`) - user-wide
//!    defaults, see [`GlobalConfig`]
//! 2. **Asset manifest** (`assets.toml`) - the asset declarations, see
//!    [`crate::manifest`]
//!
//! # Configuration Priority
//!
//! 1. Command-line flags (`--config`, `--manifest-path`)
//! 2. Environment variables (`ASSETGRAPH_CONFIG`, `RUST_LOG`)
//! 3. Global configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetgraph::config::GlobalConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let global = GlobalConfig::load().await?;
//! println!("Looking for {}", global.manifest_name());
//! # Ok(())
//! # }
//! ```

mod global;
mod parser;

pub use global::GlobalConfig;
pub use parser::parse_config;
