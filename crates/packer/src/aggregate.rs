//! Height, weight and footprint summaries of finished plans.

use u_pallet_core::{
    count_by_item, ItemCount, ItemPlacement, PalletBase, PalletId, PalletPlan, PlacementPlan,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight of a loaded pallet: base weight plus all item weights.
pub fn pallet_weight(items: &[ItemPlacement], base: &PalletBase) -> f64 {
    base.weight() + items.iter().map(|p| p.item.weight()).sum::<f64>()
}

/// Height of a loaded pallet: the highest item top, or the base height if empty.
pub fn pallet_height(items: &[ItemPlacement], base: &PalletBase) -> f64 {
    items
        .iter()
        .map(ItemPlacement::top)
        .fold(base.height(), f64::max)
}

/// Per-pallet figures for reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSummary {
    /// Pallet id.
    pub id: PalletId,
    /// Placed instances grouped by article, in first-appearance order.
    pub items: Vec<ItemCount>,
    /// Number of placed instances.
    pub item_count: usize,
    /// Footprint length.
    pub length: f64,
    /// Footprint width.
    pub width: f64,
    /// Loaded height, base included.
    pub height: f64,
    /// Loaded weight, base included.
    pub weight: f64,
    /// Item volume over the envelope volume above the base (0.0 - 1.0).
    pub utilization: f64,
}

/// Figures for a whole plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Number of pallets.
    pub pallet_count: usize,
    /// Number of placed item instances.
    pub placed_count: usize,
    /// Number of rejected item instances.
    pub rejected_count: usize,
    /// Tallest pallet.
    pub overall_height: f64,
    /// Sum of all pallet weights.
    pub overall_weight: f64,
    /// Longest pallet footprint, at least the base length.
    pub final_length: f64,
    /// Widest pallet footprint, at least the base width.
    pub final_width: f64,
    /// Per-pallet figures in pallet order.
    pub pallets: Vec<PalletSummary>,
}

impl PlanSummary {
    /// Returns overall utilization weighted by pallet envelope volume.
    pub fn utilization(&self) -> f64 {
        let (used, total) = self.pallets.iter().fold((0.0, 0.0), |(u, t), p| {
            let volume = p.length * p.width * p.height;
            (u + p.utilization * volume, t + volume)
        });
        if total > 0.0 {
            used / total
        } else {
            0.0
        }
    }
}

/// Summarizes one pallet. Recomputes totals from the placements.
pub fn summarize_pallet(pallet: &PalletPlan, base: &PalletBase) -> PalletSummary {
    let height = pallet_height(&pallet.items, base);
    let load_volume = pallet.max_l * pallet.max_b * (height - base.height());
    let item_volume: f64 = pallet.items.iter().map(|p| p.item.volume()).sum();

    PalletSummary {
        id: pallet.id,
        items: count_by_item(&pallet.items),
        item_count: pallet.item_count(),
        length: pallet.max_l,
        width: pallet.max_b,
        height,
        weight: pallet_weight(&pallet.items, base),
        utilization: if load_volume > 0.0 {
            item_volume / load_volume
        } else {
            0.0
        },
    }
}

/// Summarizes a finished plan.
pub fn summarize(plan: &PlacementPlan, base: &PalletBase) -> PlanSummary {
    let pallets: Vec<PalletSummary> = plan
        .pallets
        .iter()
        .map(|p| summarize_pallet(p, base))
        .collect();

    PlanSummary {
        pallet_count: pallets.len(),
        placed_count: plan.placed_count(),
        rejected_count: plan.rejected_count(),
        overall_height: pallets.iter().map(|p| p.height).fold(0.0, f64::max),
        overall_weight: pallets.iter().map(|p| p.weight).sum(),
        final_length: pallets.iter().map(|p| p.length).fold(base.length(), f64::max),
        final_width: pallets.iter().map(|p| p.width).fold(base.width(), f64::max),
        pallets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_pallet_core::ItemSpec;

    fn base() -> PalletBase {
        PalletBase::new(ItemSpec::new("PAL-EU", 120.0, 80.0, 15.0).with_weight(25.0))
    }

    fn pallet(id: PalletId, items: Vec<ItemPlacement>, max_l: f64) -> PalletPlan {
        PalletPlan {
            id,
            final_height: pallet_height(&items, &base()),
            final_weight: pallet_weight(&items, &base()),
            items,
            max_l,
            max_b: 80.0,
            drawing_offset_x: 0.0,
        }
    }

    #[test]
    fn test_empty_pallet_defaults_to_base() {
        assert_relative_eq!(pallet_height(&[], &base()), 15.0);
        assert_relative_eq!(pallet_weight(&[], &base()), 25.0);
    }

    #[test]
    fn test_summarize_totals() {
        let crate_item = ItemSpec::new("K", 40.0, 30.0, 20.0).with_weight(5.0);
        let long = ItemSpec::new("LONG", 200.0, 80.0, 10.0).with_weight(40.0);

        let plan = PlacementPlan {
            pallets: vec![
                pallet(
                    1,
                    vec![
                        ItemPlacement::new(crate_item.clone(), 0.0, 0.0, 15.0),
                        ItemPlacement::new(crate_item.clone(), 40.0, 0.0, 15.0),
                        ItemPlacement::new(crate_item, -40.0, -25.0, 35.0),
                    ],
                    120.0,
                ),
                pallet(2, vec![ItemPlacement::new(long, 0.0, 0.0, 15.0)], 200.0),
            ],
            rejected: Vec::new(),
        };

        let summary = summarize(&plan, &base());
        assert_eq!(summary.pallet_count, 2);
        assert_eq!(summary.placed_count, 4);
        assert_relative_eq!(summary.overall_height, 55.0);
        assert_relative_eq!(summary.overall_weight, 40.0 + 65.0);
        assert_relative_eq!(summary.final_length, 200.0);
        assert_relative_eq!(summary.final_width, 80.0);

        let first = &summary.pallets[0];
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].count, 3);
        assert_relative_eq!(first.height, 55.0);
        assert!(first.utilization > 0.0 && first.utilization <= 1.0);
    }

    #[test]
    fn test_floor_only_plan() {
        let plan = PlacementPlan {
            pallets: vec![pallet(1, Vec::new(), 120.0)],
            rejected: Vec::new(),
        };
        let summary = summarize(&plan, &base());
        assert_relative_eq!(summary.overall_height, 15.0);
        assert_relative_eq!(summary.overall_weight, 25.0);
        assert_relative_eq!(summary.pallets[0].utilization, 0.0);
        assert_relative_eq!(summary.utilization(), 0.0);
    }
}
