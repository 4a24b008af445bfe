//! Solver trait.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::geometry::PalletBase;
use crate::manifest::LoadManifest;
use crate::result::PlacementPlan;
use crate::Result;

/// Trait for pallet load solvers.
pub trait Solver {
    /// Returns the configuration the solver was built with.
    fn config(&self) -> &Config;

    /// Packs a manifest onto pallets built on `base`.
    ///
    /// Structural problems (invalid base, invalid entries) abort the run;
    /// item instances that cannot fit any unit are collected in
    /// [`PlacementPlan::rejected`].
    fn pack(&self, manifest: &LoadManifest, base: &PalletBase) -> Result<PlacementPlan>;

    /// Resolves the configured pallet base in `catalog`, then packs.
    ///
    /// Returns [`crate::Error::CatalogEntryMissing`] before any placement work
    /// if the base is not in the catalog.
    fn pack_with_catalog<C: Catalog + ?Sized>(
        &self,
        manifest: &LoadManifest,
        catalog: &C,
    ) -> Result<PlacementPlan> {
        let base = catalog.pallet_base(&self.config().base_id)?;
        self.pack(manifest, &base)
    }
}
