//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Install the stderr subscriber.
///
/// An explicit `level` (from `--verbose`/`--quiet`) wins; otherwise `RUST_LOG`
/// is honoured, falling back to warnings only. Calling this twice is a no-op.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(true).with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}
