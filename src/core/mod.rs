//! Core types for assetgraph
//!
//! - [`asset`] - the value types that flow through the registry:
//!   [`AssetLocation`], [`Locator`] and the resolved [`Asset`] record
//! - [`error`] - [`AssetError`], [`ErrorContext`] and [`user_friendly_error`]
//!
//! Everything here is plain data; the graph logic lives in
//! [`crate::resolver`].

pub mod asset;
pub mod error;

pub use asset::{Asset, AssetLocation, Locator};
pub use error::{AssetError, ErrorContext, PendingAsset, user_friendly_error};
