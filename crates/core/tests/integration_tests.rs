//! Integration tests for u-pallet-core.

use u_pallet_core::catalog::{Catalog, ItemCatalog};
use u_pallet_core::footprint::Footprint;
use u_pallet_core::geometry::{ItemSpec, PalletBase};
use u_pallet_core::manifest::{LoadEntry, LoadManifest};
use u_pallet_core::placement::{count_by_item, ItemPlacement};
use u_pallet_core::result::{PalletPlan, PlacementPlan};
use u_pallet_core::{Config, Error};

fn catalog() -> ItemCatalog {
    [
        ItemSpec::new("PAL-EU", 120.0, 80.0, 14.4)
            .with_name("Europalette")
            .with_weight(25.0)
            .with_unit("Palette")
            .with_color(0xc8a165),
        ItemSpec::new("KT-10", 40.0, 30.0, 20.0)
            .with_name("Karton klein")
            .with_weight(4.5)
            .with_unit("Stk"),
        ItemSpec::new("KT-20", 60.0, 40.0, 40.0)
            .with_name("Karton gross")
            .with_weight(11.0)
            .with_unit("Stk"),
    ]
    .into_iter()
    .collect()
}

mod catalog_tests {
    use super::*;

    #[test]
    fn test_base_resolution_uses_configured_id() {
        let catalog = catalog();
        let config = Config::default();
        let base = catalog.pallet_base(&config.base_id).unwrap();

        assert_eq!(base.spec().name(), "Europalette");
        assert!(base.validate(&config.limits).is_ok());
        assert_eq!(base.spec().color(), 0xc8a165);
    }

    #[test]
    fn test_missing_base() {
        let catalog = catalog();
        let config = Config::default().with_base_id("PAL-CH");
        assert_eq!(
            catalog.pallet_base(&config.base_id),
            Err(Error::CatalogEntryMissing("PAL-CH".to_string()))
        );
    }
}

mod manifest_tests {
    use super::*;

    #[test]
    fn test_manifest_building_flow() {
        let catalog = catalog();
        let mut manifest = LoadManifest::new();

        manifest.add(&catalog, "KT-10", 4).unwrap();
        manifest.add(&catalog, "KT-20", 2).unwrap();
        assert!(manifest.add(&catalog, "PAL-EU", 1).is_err());
        assert!(manifest.add(&catalog, "KT-99", 1).is_err());

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.total_quantity(), 6);
        assert!(manifest.validate().is_ok());

        manifest.remove(0);
        assert_eq!(manifest.total_quantity(), 2);
    }

    #[test]
    fn test_push_validates_items() {
        let mut manifest = LoadManifest::new();
        let flat = ItemSpec::new("FLAT", 40.0, 30.0, 0.0);
        assert!(matches!(
            manifest.push(LoadEntry::new(flat, 1)),
            Err(Error::InvalidManifestEntry { .. })
        ));
        assert!(manifest.is_empty());
    }
}

mod plan_tests {
    use super::*;

    #[test]
    fn test_plan_counts_and_grouping() {
        let catalog = catalog();
        let small = catalog.get("KT-10").unwrap().clone();
        let big = catalog.get("KT-20").unwrap().clone();

        let pallet = PalletPlan {
            id: 1,
            items: vec![
                ItemPlacement::new(small.clone(), -40.0, -25.0, 14.4),
                ItemPlacement::new(big, 10.0, -20.0, 14.4),
                ItemPlacement::new(small, -40.0, 5.0, 14.4),
            ],
            max_l: 120.0,
            max_b: 80.0,
            final_height: 54.4,
            final_weight: 45.0,
            drawing_offset_x: 0.0,
        };

        assert!(pallet.overlapping_pairs().is_empty());
        assert_eq!(pallet.layer_heights(), vec![14.4]);

        let counts = count_by_item(&pallet.items);
        assert_eq!(counts[0].id, "KT-10");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].name, "Karton gross");

        let plan = PlacementPlan {
            pallets: vec![pallet],
            rejected: Vec::new(),
        };
        assert_eq!(plan.placed_count(), 3);
        assert!(plan.all_placed());
    }

    #[test]
    fn test_footprints_within_base() {
        let base = PalletBase::new(ItemSpec::new("PAL-EU", 120.0, 80.0, 14.4));
        let floor = Footprint::centered(0.0, 0.0, base.length(), base.width());
        let corner = Footprint::centered(-40.0, -25.0, 40.0, 30.0);
        assert!(corner.is_within(&floor));
        assert!(!Footprint::centered(50.0, 0.0, 40.0, 30.0).is_within(&floor));
    }
}
