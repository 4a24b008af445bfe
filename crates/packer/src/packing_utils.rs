//! Shared helpers for the pallet packer.
//!
//! - [`InstanceInfo`]: maps expanded instances back to their manifest entry
//! - [`build_instances`]: flattens a manifest into instances in load order
//! - [`fits_alone`]: whether one instance fits an otherwise empty unit
//! - [`capacity_error`]: the per-instance rejection for items that do not fit

use u_pallet_core::footprint::FOOTPRINT_EPSILON;
use u_pallet_core::{Error, ItemSpec, LoadManifest, PalletBase, PalletLimits};

/// Instance information mapping expanded instances to manifest entries.
///
/// An entry with quantity > 1 expands into that many instances, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceInfo {
    /// Index into the manifest entries.
    pub entry_idx: usize,
    /// Instance number within the entry's quantity.
    pub instance_num: usize,
}

/// Builds the instance sequence from a manifest, preserving entry order.
pub fn build_instances(manifest: &LoadManifest) -> Vec<InstanceInfo> {
    let mut instances = Vec::with_capacity(manifest.total_quantity());
    for (entry_idx, entry) in manifest.entries().iter().enumerate() {
        for instance_num in 0..entry.quantity {
            instances.push(InstanceInfo {
                entry_idx,
                instance_num,
            });
        }
    }
    instances
}

/// Returns true if `item` can be carried centered on an empty pallet.
pub fn fits_alone(item: &ItemSpec, base: &PalletBase, limits: &PalletLimits) -> bool {
    base.length().max(item.length()) <= limits.max_length + FOOTPRINT_EPSILON
        && base.width().max(item.width()) <= limits.max_width + FOOTPRINT_EPSILON
        && base.height() + item.height() <= limits.max_height + FOOTPRINT_EPSILON
}

/// Builds the [`Error::ItemExceedsUnitCapacity`] for one instance.
pub fn capacity_error(item: &ItemSpec, instance: usize, limits: &PalletLimits) -> Error {
    Error::ItemExceedsUnitCapacity {
        id: item.id().clone(),
        instance,
        length: item.length(),
        width: item.width(),
        height: item.height(),
        max_length: limits.max_length,
        max_width: limits.max_width,
        max_height: limits.max_height,
    }
}
