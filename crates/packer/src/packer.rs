//! Greedy layer/row pallet packer.

use crate::decision::{decide, Attempt};
use crate::packing_utils::{build_instances, capacity_error, fits_alone};
use crate::state::PackingState;
use rayon::prelude::*;
use u_pallet_core::solver::Solver;
use u_pallet_core::{Config, Error, ItemSpec, LoadManifest, PalletBase, PlacementPlan, Result};

/// Upper bound on decision steps for one item on one pallet.
///
/// A placement takes at most one row advance or one close/open layer pair
/// before the item is placed or the pallet overflows.
const MAX_STEPS_PER_PALLET: usize = 4;

/// Single-pass pallet packer.
///
/// Items are taken strictly in manifest order. Each one goes into the active
/// row, a new row, or a new layer of the current pallet; when none of these
/// fit, a new pallet is opened. Earlier pallets are never revisited.
#[derive(Debug, Clone, Default)]
pub struct PalletPacker {
    config: Config,
}

impl PalletPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Packs several independent manifests in parallel.
    ///
    /// Results are returned in input order.
    pub fn pack_many(
        &self,
        manifests: &[LoadManifest],
        base: &PalletBase,
    ) -> Vec<Result<PlacementPlan>> {
        manifests
            .par_iter()
            .map(|manifest| self.pack(manifest, base))
            .collect()
    }

    /// Layer-based placement over the expanded manifest.
    fn layer_packing(&self, manifest: &LoadManifest, base: &PalletBase) -> Result<PlacementPlan> {
        let limits = &self.config.limits;
        let instances = build_instances(manifest);

        let mut plan = PlacementPlan::new();
        let mut state = PackingState::new(1, base, 0.0);

        for info in &instances {
            let item = &manifest.entries()[info.entry_idx].item;

            if !fits_alone(item, base, limits) {
                let err = capacity_error(item, info.instance_num, limits);
                log::warn!("{err}");
                plan.rejected.push(err);
                continue;
            }

            while !self.place_item(&mut state, item)? {
                if state.is_empty() {
                    return Err(Error::Internal(format!(
                        "item '{}' rejected by empty pallet {}",
                        item.id(),
                        state.id()
                    )));
                }

                let offset = state.drawing_offset_x() + base.length() * self.config.layout_spacing;
                let next = PackingState::new(state.id() + 1, base, offset);
                log::debug!(
                    "pallet {} cannot take '{}', opening pallet {}",
                    state.id(),
                    item.id(),
                    next.id()
                );
                plan.pallets
                    .push(std::mem::replace(&mut state, next).finalize(base));
            }
        }

        plan.pallets.push(state.finalize(base));

        log::info!(
            "packed {} of {} instances on {} pallet(s), {} rejected",
            plan.placed_count(),
            instances.len(),
            plan.pallet_count(),
            plan.rejected_count()
        );

        Ok(plan)
    }

    /// Runs the decision loop for one item on the current pallet.
    ///
    /// Returns false if the pallet overflows.
    fn place_item(&self, state: &mut PackingState, item: &ItemSpec) -> Result<bool> {
        for _ in 0..MAX_STEPS_PER_PALLET {
            match decide(state, item, &self.config.limits) {
                Attempt::Overflow(reason) => {
                    log::trace!(
                        "pallet {} overflows on '{}': {:?}",
                        state.id(),
                        item.id(),
                        reason
                    );
                    return Ok(false);
                }
                attempt => {
                    if attempt == Attempt::CloseLayer {
                        log::trace!(
                            "pallet {} closes layer at {:.1} cm",
                            state.id(),
                            state.current_h()
                        );
                    }
                    let placed = attempt.places_item();
                    state.apply(attempt, item);
                    if placed {
                        return Ok(true);
                    }
                }
            }
        }

        Err(Error::Internal(format!(
            "no decision for '{}' on pallet {} after {} steps",
            item.id(),
            state.id(),
            MAX_STEPS_PER_PALLET
        )))
    }
}

impl Solver for PalletPacker {
    fn config(&self) -> &Config {
        &self.config
    }

    fn pack(&self, manifest: &LoadManifest, base: &PalletBase) -> Result<PlacementPlan> {
        self.config.validate()?;
        base.validate(&self.config.limits)?;
        manifest.validate()?;

        self.layer_packing(manifest, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_pallet_core::LoadEntry;

    fn base() -> PalletBase {
        PalletBase::new(
            ItemSpec::new("PAL-EU", 120.0, 80.0, 15.0)
                .with_weight(25.0)
                .with_unit("Palette"),
        )
    }

    fn manifest(entries: Vec<(ItemSpec, usize)>) -> LoadManifest {
        LoadManifest::from(
            entries
                .into_iter()
                .map(|(item, qty)| LoadEntry::new(item, qty))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_empty_manifest_gives_floor_only_pallet() {
        let packer = PalletPacker::default_config();
        let plan = packer.pack(&LoadManifest::new(), &base()).unwrap();

        assert_eq!(plan.pallet_count(), 1);
        let pallet = &plan.pallets[0];
        assert_eq!(pallet.id, 1);
        assert!(pallet.is_empty());
        assert_relative_eq!(pallet.final_height, 15.0);
        assert_relative_eq!(pallet.final_weight, 25.0);
    }

    #[test]
    fn test_single_small_item() {
        let packer = PalletPacker::default_config();
        let item = ItemSpec::new("K", 40.0, 30.0, 20.0).with_weight(5.0);
        let plan = packer.pack(&manifest(vec![(item, 1)]), &base()).unwrap();

        assert_eq!(plan.pallet_count(), 1);
        let pallet = &plan.pallets[0];
        assert_eq!(pallet.item_count(), 1);
        let p = &pallet.items[0];
        assert_relative_eq!(p.pos_l, 0.0);
        assert_relative_eq!(p.pos_z, 0.0);
        assert_relative_eq!(p.pos_h, 15.0);
        assert_relative_eq!(pallet.final_height, 35.0);
        assert_relative_eq!(pallet.final_weight, 30.0);
    }

    #[test]
    fn test_oversized_item_rejected_without_new_pallet() {
        let packer = PalletPacker::default_config();
        let long = ItemSpec::new("LONG", 300.0, 40.0, 20.0);
        let plan = packer.pack(&manifest(vec![(long, 1)]), &base()).unwrap();

        assert_eq!(plan.pallet_count(), 1);
        assert_eq!(plan.placed_count(), 0);
        assert_eq!(plan.rejected_count(), 1);
        assert!(matches!(
            plan.rejected[0],
            Error::ItemExceedsUnitCapacity { ref id, instance: 0, .. } if id == "LONG"
        ));
    }

    #[test]
    fn test_overflow_to_second_pallet() {
        let packer = PalletPacker::default_config();
        // Full-footprint blocks: one per layer, 15 + 3 * 40 = 135, a fourth would reach 175.
        let block = ItemSpec::new("BLK", 120.0, 80.0, 40.0).with_weight(100.0);
        let plan = packer.pack(&manifest(vec![(block, 4)]), &base()).unwrap();

        assert_eq!(plan.pallet_count(), 2);
        assert_eq!(plan.pallets[0].item_count(), 3);
        assert_eq!(plan.pallets[1].item_count(), 1);
        assert_eq!(plan.pallets[1].id, 2);
        assert!(plan.pallets[1].drawing_offset_x > plan.pallets[0].drawing_offset_x);
        assert_relative_eq!(plan.pallets[1].drawing_offset_x, 180.0);

        let heights: Vec<f64> = plan.pallets[0].items.iter().map(|p| p.pos_h).collect();
        assert_eq!(heights, vec![15.0, 55.0, 95.0]);
    }

    #[test]
    fn test_invalid_quantity_aborts() {
        let packer = PalletPacker::default_config();
        let item = ItemSpec::new("K", 40.0, 30.0, 20.0);
        let result = packer.pack(&manifest(vec![(item, 0)]), &base());
        assert!(matches!(result, Err(Error::InvalidManifestEntry { .. })));
    }

    #[test]
    fn test_invalid_base_aborts() {
        let packer = PalletPacker::default_config();
        let base = PalletBase::new(ItemSpec::new("PAL-XL", 400.0, 80.0, 15.0));
        let result = packer.pack(&LoadManifest::new(), &base);
        assert!(matches!(result, Err(Error::InvalidPalletBase(_))));
    }

    #[test]
    fn test_custom_limits() {
        let packer = PalletPacker::new(Config::default().with_max_height(60.0));
        let item = ItemSpec::new("K", 120.0, 80.0, 20.0);
        let plan = packer.pack(&manifest(vec![(item, 3)]), &base()).unwrap();

        // 15 + 20 + 20 = 55; the third layer would end at 75.
        assert_eq!(plan.pallet_count(), 2);
        for pallet in &plan.pallets {
            assert!(pallet.final_height <= 60.0);
        }
    }

    #[test]
    fn test_pack_many_matches_sequential() {
        let packer = PalletPacker::default_config();
        let small = ItemSpec::new("K", 40.0, 30.0, 20.0);
        let manifests = vec![
            manifest(vec![(small.clone(), 5)]),
            LoadManifest::new(),
            manifest(vec![(small, 40)]),
        ];

        let results = packer.pack_many(&manifests, &base());
        assert_eq!(results.len(), 3);
        for (manifest, result) in manifests.iter().zip(results) {
            assert_eq!(result.unwrap(), packer.pack(manifest, &base()).unwrap());
        }
    }
}
