//! Validate the asset manifest.
//!
//! Every declared asset is resolved on its own, so one broken asset does not
//! hide problems in the others. Reported problems:
//!
//! - **Errors**: assets whose resolution fails (unregistered dependencies,
//!   cycles and other deadlocks)
//! - **Warnings**: ids declared more than once (only the first declaration is
//!   registered) and dependencies no asset declares
//!
//! With `--strict`, warnings fail validation too.
//!
//! ```bash
//! assetgraph validate
//! assetgraph validate --strict --format json
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::cli::common::{OutputFormat, ProjectContext};
use crate::core::AssetError;

/// Command to validate every declared asset.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,
}

/// Aggregated validation outcome, serialized as-is for JSON output.
#[derive(Debug, Default, Serialize)]
pub struct ValidationResults {
    /// No errors (and no warnings in strict mode)
    pub valid: bool,
    /// Number of registered assets
    pub assets_total: usize,
    /// Ids of assets that resolved, in registration order
    pub resolvable: Vec<String>,
    /// One message per failing asset
    pub errors: Vec<String>,
    /// Non-fatal findings
    pub warnings: Vec<String>,
}

impl ValidateCommand {
    pub fn execute(self, project: &ProjectContext) -> Result<()> {
        let results = self.check(project);
        print!("{}", self.render(&results)?);

        if results.valid {
            Ok(())
        } else {
            let problems = results.errors.len()
                + if self.strict { results.warnings.len() } else { 0 };
            Err(AssetError::Other {
                message: format!("Validation failed with {problems} problem(s)"),
            }
            .into())
        }
    }

    fn check(&self, project: &ProjectContext) -> ValidationResults {
        let registry = &project.registry;
        let mut results = ValidationResults {
            assets_total: registry.len(),
            ..ValidationResults::default()
        };

        for node in registry.nodes() {
            match registry.resolve_assets([node.id()]) {
                Ok(resolved) => {
                    tracing::debug!("{} resolves to {} record(s)", node.id(), resolved.len());
                    results.resolvable.push(node.id().to_string());
                }
                Err(err) => results.errors.push(format!("{}: {err}", node.id())),
            }
        }

        for id in &project.duplicates {
            results.warnings.push(format!("Asset '{id}' is declared more than once; later declarations are ignored"));
        }

        for (dependency, dependents) in registry.missing_dependencies() {
            results.warnings.push(format!(
                "Dependency '{dependency}' is not declared (required by {})",
                dependents.join(", ")
            ));
        }

        results.valid = results.errors.is_empty() && (!self.strict || results.warnings.is_empty());
        results
    }

    fn render(&self, results: &ValidationResults) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(results)?));
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}/{} asset(s) resolve\n",
            if results.errors.is_empty() { "✓".green() } else { "✗".red() },
            results.resolvable.len(),
            results.assets_total
        ));
        for error in &results.errors {
            output.push_str(&format!("{} {error}\n", "✗".red()));
        }
        for warning in &results.warnings {
            output.push_str(&format!("{} {warning}\n", "⚠".yellow()));
        }
        if results.valid {
            output.push_str(&format!("{} Manifest is valid\n", "✓".green()));
        }
        Ok(output)
    }
}
