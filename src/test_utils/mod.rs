//! Test utilities for assetgraph
//!
//! Sample manifests and a once-only tracing setup, shared by unit tests and
//! (through the `test-utils` feature) integration tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use assetgraph::test_utils::{ManifestFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let temp = tempfile::tempdir().unwrap();
//! let manifest = ManifestFixture::basic().write_to(temp.path()).unwrap();
//! ```

pub mod fixtures;

pub use fixtures::ManifestFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` if given, otherwise `RUST_LOG`; with neither, logging stays
/// off.
///
/// ```bash
/// RUST_LOG=assetgraph=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
