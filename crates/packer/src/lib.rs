//! # U-Pallet Packer
//!
//! Greedy shelf/layer packing of load manifests onto pallets.
//!
//! Items are placed in manifest order, row by row along the pallet length,
//! rows front to back, layers bottom to top. When the current pallet cannot
//! take an item, a new pallet is opened next to it.
//!
//! ## Features
//!
//! - Deterministic single-pass placement, O(item instances)
//! - Centered overhang for a single oversized item on an empty pallet
//! - Per-instance rejection of items that exceed the unit limits
//! - Plan summaries (height, weight, footprint, article counts)
//! - Parallel packing of independent manifests

pub mod aggregate;
pub mod decision;
pub mod packer;
pub mod packing_utils;
pub mod state;

// Re-exports
pub use aggregate::{summarize, PalletSummary, PlanSummary};
pub use decision::{Attempt, OverflowReason};
pub use packer::PalletPacker;
pub use state::PackingState;
pub use u_pallet_core::{Config, Error, PlacementPlan, Result, Solver};
