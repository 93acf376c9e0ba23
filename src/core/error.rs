//! Error handling for assetgraph
//!
//! Two layers, as in the rest of the crate:
//! 1. [`AssetError`] - strongly-typed failures raised by the registry, the
//!    manifest loader and location parsing
//! 2. [`ErrorContext`] - a wrapper that adds details and an actionable
//!    suggestion for display in the CLI
//!
//! Resolver operations return `Result<_, AssetError>` so callers can match on
//! the failure. I/O and parsing layers return [`anyhow::Result`] with context
//! attached, and [`user_friendly_error`] turns either back into something
//! presentable.
//!
//! # Examples
//!
//! ```rust,no_run
//! use assetgraph::core::{AssetError, user_friendly_error};
//!
//! let error = AssetError::UnresolvableAssetId {
//!     id: "jquery".to_string(),
//! };
//! user_friendly_error(anyhow::Error::from(error)).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::AssetLocation;

/// An asset still waiting on dependencies when elimination stalled.
///
/// Carried by [`AssetError::UnsatisfiableDependencies`], one per id left in the
/// closure, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsset {
    /// Id of the stalled asset.
    pub id: String,
    /// Dependencies of `id` that were never delivered.
    pub waiting_on: Vec<String>,
}

impl fmt::Display for PendingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> [{}]", self.id, self.waiting_on.join(", "))
    }
}

fn format_pending(remaining: &[PendingAsset]) -> String {
    remaining.iter().map(|pending| format!("\n  {pending}")).collect()
}

fn format_locations() -> String {
    AssetLocation::ALL.iter().map(|location| location.as_str()).collect::<Vec<_>>().join(", ")
}

/// The main error type for assetgraph operations
///
/// # Error Categories
///
/// ## Registration
/// - [`DuplicateAssetId`] - the id is already registered; nothing changed
/// - [`InvalidAsset`] - a declaration is malformed (empty id, no resources)
///
/// ## Resolution
/// - [`UnresolvableAssetId`] - the closure reached an id that was never registered
/// - [`UnsatisfiableDependencies`] - elimination stalled (a cycle or other deadlock)
///
/// ## Configuration
/// - [`ManifestNotFound`] - no manifest of the configured name in the directory tree
/// - [`ManifestPathNotFound`] - an explicitly given manifest path does not exist
/// - [`ManifestParseError`] - the manifest is not valid TOML for the expected shape
/// - [`InvalidLocation`] - an unknown location tag
///
/// [`DuplicateAssetId`]: AssetError::DuplicateAssetId
/// [`InvalidAsset`]: AssetError::InvalidAsset
/// [`UnresolvableAssetId`]: AssetError::UnresolvableAssetId
/// [`UnsatisfiableDependencies`]: AssetError::UnsatisfiableDependencies
/// [`ManifestNotFound`]: AssetError::ManifestNotFound
/// [`ManifestPathNotFound`]: AssetError::ManifestPathNotFound
/// [`ManifestParseError`]: AssetError::ManifestParseError
/// [`InvalidLocation`]: AssetError::InvalidLocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// An asset with this id is already registered.
    ///
    /// Non-fatal: the registry is left exactly as it was.
    #[error("Asset '{id}' is already registered")]
    DuplicateAssetId {
        /// The rejected id
        id: String,
    },

    /// A requested or transitively required id was never registered.
    #[error("Cannot resolve asset {id}")]
    UnresolvableAssetId {
        /// The first unregistered id encountered during closure expansion
        id: String,
    },

    /// Topological elimination found no asset whose dependencies were all
    /// delivered while assets remained.
    ///
    /// Covers genuine cycles as well as any other structural deadlock inside
    /// the closure; the two are not distinguished.
    #[error("Cannot satisfy asset dependencies:{}", format_pending(.remaining))]
    UnsatisfiableDependencies {
        /// Every asset still in the closure with its outstanding dependencies
        remaining: Vec<PendingAsset>,
    },

    /// An asset declaration is malformed.
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset {
        /// Declared (or derived) id, possibly empty
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// The upward search found no manifest.
    #[error("Manifest file {name} not found in current directory or any parent directory")]
    ManifestNotFound {
        /// File name that was searched for
        name: String,
    },

    /// A manifest path given explicitly does not exist.
    #[error("Manifest file {path} does not exist")]
    ManifestPathNotFound {
        /// The path as given
        path: String,
    },

    /// The manifest could not be parsed.
    #[error("Invalid manifest file syntax in {file}: {reason}")]
    ManifestParseError {
        /// Path of the manifest
        file: String,
        /// Parser message
        reason: String,
    },

    /// A location tag did not match any known location.
    #[error("Unknown asset location '{value}' (expected one of: {})", format_locations())]
    InvalidLocation {
        /// The rejected tag
        value: String,
    },

    /// Anything else.
    #[error("{message}")]
    Other {
        /// Message
        message: String,
    },
}

impl AssetError {
    /// Ids named by this error, for diagnostics and tests.
    #[must_use]
    pub fn asset_ids(&self) -> Vec<&str> {
        match self {
            Self::DuplicateAssetId { id }
            | Self::UnresolvableAssetId { id }
            | Self::InvalidAsset { id, .. } => vec![id.as_str()],
            Self::UnsatisfiableDependencies { remaining } => {
                remaining.iter().map(|pending| pending.id.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Error wrapper with details and a suggestion for CLI display
///
/// ```rust,no_run
/// use assetgraph::core::{AssetError, ErrorContext};
///
/// let context = ErrorContext::new(AssetError::ManifestNotFound {
///     name: "assets.toml".to_string(),
/// })
///     .with_suggestion("Create an assets.toml file")
///     .with_details("assetgraph searches the current directory and its parents");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: AssetError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub const fn new(error: AssetError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// Recognizes [`AssetError`] anywhere in the `anyhow` chain and [`toml::de::Error`];
/// everything else is reported with its full cause chain.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(asset_error) = error.chain().find_map(|cause| cause.downcast_ref::<AssetError>()) {
        return create_error_context(asset_error.clone());
    }

    // Manifests surface as ManifestParseError above; this covers the global config
    if let Some(toml_error) = error.chain().find_map(|cause| cause.downcast_ref::<toml::de::Error>()) {
        let details = toml_error.to_string();
        return ErrorContext::new(AssetError::Other {
            message: error.to_string(),
        })
        .with_suggestion("Check the TOML syntax and field names. Supported keys: default_location, manifest_name")
        .with_details(details.trim_end().to_string());
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(AssetError::Other {
        message,
    })
}

fn create_error_context(error: AssetError) -> ErrorContext {
    match &error {
        AssetError::DuplicateAssetId { id } => {
            let suggestion = format!("Rename one of the declarations of '{id}' or remove the duplicate");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("The first declaration of an id wins; later ones are ignored")
        }
        AssetError::UnresolvableAssetId { id } => {
            let suggestion = format!("Declare an asset with id '{id}' or remove it from the dependency lists that name it");
            ErrorContext::new(error)
                .with_suggestion(suggestion)
                .with_details("Every id reachable from the requested assets must be registered")
        }
        AssetError::UnsatisfiableDependencies { .. } => ErrorContext::new(error)
            .with_suggestion("Break the dependency cycle among the listed assets. Use 'assetgraph tree <id>' to inspect it")
            .with_details("Each listed asset waits on the ids in brackets, none of which can be delivered first"),
        AssetError::InvalidAsset { .. } => ErrorContext::new(error)
            .with_suggestion("Give every asset a non-empty id and at least one resource value"),
        AssetError::ManifestNotFound { name } => {
            let suggestion = format!("Create {name} in your project directory or pass --manifest-path");
            let details = format!(
                "assetgraph looks for {name} in the current directory and parent directories up to the filesystem root"
            );
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }
        AssetError::ManifestPathNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Check the path passed to --manifest-path"),
        AssetError::ManifestParseError { file, .. } => {
            let suggestion = format!("Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets, unknown fields");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        AssetError::InvalidLocation { .. } => ErrorContext::new(error)
            .with_suggestion(format!("Use one of: {}", format_locations())),
        AssetError::Other { .. } => ErrorContext::new(error),
    }
}
