//! Manage the global assetgraph configuration.
//!
//! ```bash
//! assetgraph config path          # print the config file location
//! assetgraph config               # show the effective settings
//! assetgraph config init          # write a starter config
//! assetgraph config init --force  # overwrite an existing one
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::GlobalConfig;
use crate::core::AssetLocation;

/// Command to manage the global configuration file.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    /// Write a starter configuration file.
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration (default).
    Show,

    /// Print the configuration file path.
    Path,
}

impl ConfigCommand {
    pub async fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let path = match config_path {
            Some(path) => path,
            None => GlobalConfig::default_path()?,
        };

        match self.command {
            Some(ConfigSubcommands::Init { force }) => {
                print!("{}", Self::init(&path, force).await?);
            }
            Some(ConfigSubcommands::Show) | None => print!("{}", Self::show(&path).await?),
            Some(ConfigSubcommands::Path) => println!("{}", path.display()),
        }
        Ok(())
    }

    async fn init(path: &Path, force: bool) -> Result<String> {
        if path.exists() && !force {
            return Ok(format!(
                "{} Global config already exists at: {}\n   Use --force to overwrite\n",
                "✗".red(),
                path.display()
            ));
        }

        let config = GlobalConfig {
            default_location: Some(AssetLocation::default()),
            manifest_name: None,
        };
        config.save_to(path).await?;
        tracing::info!("Wrote global config to {}", path.display());

        Ok(format!("{} Created global config at: {}\n", "✓".green(), path.display()))
    }

    async fn show(path: &Path) -> Result<String> {
        let config = GlobalConfig::load_with_optional(Some(path.to_path_buf())).await?;

        let mut output = format!("{}\nLocation: {}\n", "Global Configuration".bold(), path.display());
        if !path.exists() {
            output.push_str("(file not found, using defaults)\n");
        }
        output.push_str(&format!("default_location = \"{}\"\n", config.location()));
        output.push_str(&format!("manifest_name = \"{}\"\n", config.manifest_name()));
        Ok(output)
    }
}
