//! # U-Pallet
//!
//! Pallet load planning for item manifests.
//!
//! Articles from a catalog are placed one by one, in manifest order, into
//! rows, layers and pallets, subject to the loaded-unit length, width and
//! height limits.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_pallet::core::{ItemSpec, LoadEntry, LoadManifest, PalletBase};
//! use u_pallet::{PalletPacker, Solver};
//!
//! let base = PalletBase::new(ItemSpec::new("PAL-EU", 120.0, 80.0, 14.4).with_weight(25.0));
//! let carton = ItemSpec::new("KT-10", 40.0, 30.0, 20.0).with_weight(4.5);
//! let manifest = LoadManifest::from(vec![LoadEntry::new(carton, 6)]);
//!
//! let plan = PalletPacker::default_config().pack(&manifest, &base)?;
//! assert_eq!(plan.placed_count(), 6);
//! # Ok::<(), u_pallet::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and the solver trait.
pub use u_pallet_core as core;

/// Greedy layer packer and plan summaries.
pub use u_pallet_packer as packer;

// Re-export commonly used types at root level
pub use u_pallet_core::{Config, Error, PalletLimits, PlacementPlan, Result, Solver};
pub use u_pallet_packer::{summarize, PalletPacker, PlanSummary};
