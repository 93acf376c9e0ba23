//! Names and environment variables shared across the crate.

/// File name of the asset manifest searched for by the CLI.
pub const MANIFEST_FILE_NAME: &str = "assets.toml";

/// Directory under the user's home holding global configuration.
pub const CONFIG_DIR_NAME: &str = ".assetgraph";

/// File name of the global configuration inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the global configuration path.
pub const CONFIG_PATH_ENV: &str = "ASSETGRAPH_CONFIG";

/// Log filter used when neither `RUST_LOG` nor `--verbose`/`--quiet` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
