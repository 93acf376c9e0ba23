//! Command-line interface for assetgraph.
//!
//! Every command except `config` loads the asset manifest, builds an
//! [`AssetRegistry`](crate::resolver::AssetRegistry) from it and then
//! queries the registry.
//!
//! # Available Commands
//!
//! ## Resolution
//! - `resolve` - Print the delivery order for one or more assets
//! - `lookup` - Print the locator registered for a resource value
//!
//! ## Inspection
//! - `tree` - Show the dependency tree of one or more assets
//! - `graph` - Export the whole dependency graph in Graphviz DOT format
//! - `validate` - Check that every declared asset can be resolved
//!
//! ## System Management
//! - `config` - Manage the global configuration file
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only log errors
//! - `--config` - Path to a custom global config file
//! - `--manifest-path` - Path to the asset manifest
//!
//! # Example
//!
//! ```bash
//! assetgraph resolve app
//! assetgraph --manifest-path web/assets.toml tree app
//! assetgraph graph | dot -Tsvg > assets.svg
//! ```

pub mod common;
mod config;
mod graph;
mod lookup;
mod resolve;
mod tree;
mod validate;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::GlobalConfig;
use crate::constants::CONFIG_PATH_ENV;
use common::ProjectContext;

/// Runtime configuration for CLI execution.
///
/// Built from the global flags so that tests and embedders can drive
/// [`Cli::execute_with_config`] without touching process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Explicit tracing filter. `None` defers to `RUST_LOG`.
    pub log_level: Option<String>,

    /// Global configuration file to use instead of the default location.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve web assets and their dependencies into delivery order.
#[derive(Parser, Debug)]
#[command(
    name = "assetgraph",
    about = "Resolve web assets and their dependencies into delivery order",
    version,
    long_about = "assetgraph reads an asset manifest (assets.toml), registers every declared \
                  asset and prints the order in which assets must be delivered so that each \
                  one follows everything it depends on."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a custom global configuration file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Path to the asset manifest (defaults to searching upwards for assets.toml)
    #[arg(long, global = true)]
    manifest_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the delivery order for one or more assets.
    ///
    /// See [`resolve::ResolveCommand`].
    Resolve(resolve::ResolveCommand),

    /// Print the locator registered for a resource value.
    ///
    /// See [`lookup::LookupCommand`].
    Lookup(lookup::LookupCommand),

    /// Show the dependency tree of one or more assets.
    ///
    /// See [`tree::TreeCommand`].
    Tree(tree::TreeCommand),

    /// Export the dependency graph in Graphviz DOT format.
    Graph(graph::GraphCommand),

    /// Check that every declared asset resolves.
    ///
    /// See [`validate::ValidateCommand`].
    Validate(validate::ValidateCommand),

    /// Manage the global configuration file.
    Config(config::ConfigCommand),
}

impl Cli {
    /// Execute the parsed command line.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` selects `error`; with neither
    /// the log level is left to `RUST_LOG`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        crate::logging::init_logging(config.log_level.as_deref());

        let manifest_path = self.manifest_path;
        let config_path = config.config_path;

        match self.command {
            Commands::Resolve(cmd) => cmd.execute(&load_project(manifest_path, config_path).await?),
            Commands::Lookup(cmd) => cmd.execute(&load_project(manifest_path, config_path).await?),
            Commands::Tree(cmd) => cmd.execute(&load_project(manifest_path, config_path).await?),
            Commands::Graph(cmd) => cmd.execute(&load_project(manifest_path, config_path).await?),
            Commands::Validate(cmd) => {
                cmd.execute(&load_project(manifest_path, config_path).await?)
            }
            Commands::Config(cmd) => cmd.execute(config_path).await,
        }
    }
}

async fn load_project(
    manifest_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<ProjectContext> {
    let global = GlobalConfig::load_with_optional(config_path).await?;
    ProjectContext::load(manifest_path, &global).await
}
