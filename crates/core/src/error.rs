//! Error types for U-Pallet.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result type alias for U-Pallet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a manifest or packing it.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    /// The requested identifier is not in the catalog.
    #[error("Catalog entry not found: {0}")]
    CatalogEntryMissing(String),

    /// A manifest entry has a zero quantity or a malformed item.
    #[error("Invalid manifest entry '{id}': {reason}")]
    InvalidManifestEntry {
        /// Identifier of the offending item.
        id: String,
        /// Human readable cause.
        reason: String,
    },

    /// A single item instance does not fit on an empty pallet.
    #[error(
        "Item '{id}' (instance {instance}) exceeds unit capacity: \
         {length}x{width}x{height} cm on a {max_length}x{max_width}x{max_height} cm unit"
    )]
    ItemExceedsUnitCapacity {
        /// Identifier of the rejected item.
        id: String,
        /// Zero-based instance index within its manifest entry.
        instance: usize,
        /// Item length (cm).
        length: f64,
        /// Item width (cm).
        width: f64,
        /// Item height (cm).
        height: f64,
        /// Configured maximum unit length (cm).
        max_length: f64,
        /// Configured maximum unit width (cm).
        max_width: f64,
        /// Configured maximum unit height (cm).
        max_height: f64,
    },

    /// The pallet base is malformed or larger than the unit limits.
    #[error("Invalid pallet base: {0}")]
    InvalidPalletBase(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidManifestEntry`].
    pub fn invalid_entry(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidManifestEntry {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
