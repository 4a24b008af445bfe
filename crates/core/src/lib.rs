//! # U-Pallet Core
//!
//! Core types shared by the U-Pallet load planning crates.
//!
//! ## Core Components
//!
//! - **Catalog**: [`ItemSpec`] articles looked up through the [`Catalog`] trait
//! - **Manifest**: [`LoadManifest`], an ordered list of [`LoadEntry`] lines
//! - **Plans**: [`PlacementPlan`] of finalized [`PalletPlan`]s holding [`ItemPlacement`]s
//! - **Solver trait**: [`Solver`], the common interface of packing engines
//! - **Configuration**: [`Config`] and the unit capacity [`PalletLimits`]
//!
//! ## Configuration
//!
//! ```rust
//! use u_pallet_core::Config;
//!
//! let config = Config::new()
//!     .with_max_length(240.0)
//!     .with_max_height(180.0)
//!     .with_base_id("PAL-EU");
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod catalog;
pub mod config;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod manifest;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use catalog::{Catalog, ItemCatalog};
pub use config::{Config, PalletLimits, DEFAULT_BASE_ID};
pub use error::{Error, Result};
pub use footprint::Footprint;
pub use geometry::{ItemId, ItemSpec, PalletBase, PALLET_UNIT};
pub use manifest::{LoadEntry, LoadManifest};
pub use placement::{count_by_item, ItemCount, ItemPlacement};
pub use result::{PalletId, PalletPlan, PlacementPlan};
pub use solver::Solver;
