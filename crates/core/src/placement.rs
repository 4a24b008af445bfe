//! Placement of a single item instance on a pallet.

use crate::footprint::Footprint;
use crate::geometry::{ItemId, ItemSpec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positioned item instance.
///
/// `pos_l` and `pos_z` locate the item's center relative to the pallet
/// center; `pos_h` is the height of the item's bottom face above the floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemPlacement {
    /// The placed item.
    pub item: ItemSpec,

    /// Center offset along the length axis.
    pub pos_l: f64,

    /// Center offset along the depth axis.
    pub pos_z: f64,

    /// Base height above the pallet floor.
    pub pos_h: f64,
}

impl ItemPlacement {
    /// Creates a new placement.
    pub fn new(item: ItemSpec, pos_l: f64, pos_z: f64, pos_h: f64) -> Self {
        Self {
            item,
            pos_l,
            pos_z,
            pos_h,
        }
    }

    /// Returns the occupied footprint on the pallet plane.
    pub fn footprint(&self) -> Footprint {
        Footprint::centered(
            self.pos_l,
            self.pos_z,
            self.item.length(),
            self.item.width(),
        )
    }

    /// Returns the height of the item's top face above the floor.
    pub fn top(&self) -> f64 {
        self.pos_h + self.item.height()
    }
}

/// Number of placements of one article.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemCount {
    /// Article identifier.
    pub id: ItemId,
    /// Article name.
    pub name: String,
    /// Number of placed instances.
    pub count: usize,
}

/// Groups placements by article identifier, in order of first appearance.
pub fn count_by_item(placements: &[ItemPlacement]) -> Vec<ItemCount> {
    let mut counts: Vec<ItemCount> = Vec::new();

    for p in placements {
        match counts.iter_mut().find(|c| &c.id == p.item.id()) {
            Some(entry) => entry.count += 1,
            None => counts.push(ItemCount {
                id: p.item.id().clone(),
                name: p.item.name().to_string(),
                count: 1,
            }),
        }
    }

    counts
}
