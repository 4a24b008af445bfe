//! Finished packing plans.

use crate::error::Error;
use crate::footprint::FOOTPRINT_EPSILON;
use crate::placement::ItemPlacement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a pallet within a plan (1-based, in creation order).
pub type PalletId = usize;

/// A finalized pallet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletPlan {
    /// Sequential pallet number starting at 1.
    pub id: PalletId,

    /// Placements in insertion order.
    pub items: Vec<ItemPlacement>,

    /// Largest footprint length used on this pallet.
    pub max_l: f64,

    /// Largest footprint width used on this pallet.
    pub max_b: f64,

    /// Height of the loaded unit, pallet base included.
    pub final_height: f64,

    /// Weight of the loaded unit, pallet base included.
    pub final_weight: f64,

    /// Horizontal lay-out position among sibling pallets (cm). Presentation only.
    pub drawing_offset_x: f64,
}

impl PalletPlan {
    /// Returns the number of placed items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the pallet carries nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the distinct layer base heights, lowest first.
    pub fn layer_heights(&self) -> Vec<f64> {
        let mut heights: Vec<f64> = Vec::new();
        for p in &self.items {
            if !heights
                .iter()
                .any(|h| (h - p.pos_h).abs() <= FOOTPRINT_EPSILON)
            {
                heights.push(p.pos_h);
            }
        }
        heights.sort_by(|a, b| a.total_cmp(b));
        heights
    }

    /// Returns index pairs of placements in the same layer whose footprints overlap.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            for (j, b) in self.items.iter().enumerate().skip(i + 1) {
                let same_layer = (a.pos_h - b.pos_h).abs() <= FOOTPRINT_EPSILON;
                if same_layer && a.footprint().overlaps(&b.footprint()) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

/// Result of packing one manifest.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementPlan {
    /// Pallets in creation order.
    pub pallets: Vec<PalletPlan>,

    /// Item instances that could not be placed on any unit.
    pub rejected: Vec<Error>,
}

impl PlacementPlan {
    /// Creates a new empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pallets.
    pub fn pallet_count(&self) -> usize {
        self.pallets.len()
    }

    /// Returns the number of placed item instances over all pallets.
    pub fn placed_count(&self) -> usize {
        self.pallets.iter().map(PalletPlan::item_count).sum()
    }

    /// Returns the number of rejected item instances.
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Returns true if every item instance was placed.
    pub fn all_placed(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Iterates over all placements as `(pallet id, placement)`.
    pub fn placements(&self) -> impl Iterator<Item = (PalletId, &ItemPlacement)> {
        self.pallets
            .iter()
            .flat_map(|p| p.items.iter().map(move |item| (p.id, item)))
    }
}
