//! 3D scene export of a packing plan.
//!
//! Boxes use a y-up frame in scaled units: x along the pallet length,
//! z along its width. Pallets are laid out side by side on x.

use serde::Serialize;
use u_pallet_core::{ItemSpec, PalletBase, PlacementPlan};

/// Default divisor from centimetres to scene units (metres).
pub const DEFAULT_SCALE: f64 = 100.0;

/// One rendered box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneBox {
    /// Article id.
    pub id: String,
    /// Owning pallet.
    pub pallet: usize,
    /// Size as `[length, height, width]`.
    pub size: [f64; 3],
    /// Center as `[x, y, z]`.
    pub center: [f64; 3],
    /// RGB color.
    pub color: u32,
}

/// Camera framing for the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Camera {
    /// Eye position `[x, y, z]`.
    pub position: [f64; 3],
    /// Look-at point `[x, y, z]`.
    pub target: [f64; 3],
}

/// A renderable scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Divisor applied to all centimetre values.
    pub scale: f64,
    /// Pallet bases and placed items, pallet by pallet.
    pub boxes: Vec<SceneBox>,
    /// Framing of all pallets.
    pub camera: Camera,
}

impl Scene {
    /// Builds the scene of a plan using the given scale divisor.
    pub fn from_plan(plan: &PlacementPlan, base: &PalletBase, scale: f64) -> Self {
        let mut boxes = Vec::with_capacity(plan.pallet_count() + plan.placed_count());
        let mut max_height = base.height();

        for pallet in &plan.pallets {
            let offset = pallet.drawing_offset_x / scale;
            boxes.push(scene_box(base.spec(), pallet.id, [offset, 0.0, 0.0], scale));

            for p in &pallet.items {
                let anchor = [p.pos_l / scale + offset, p.pos_h / scale, p.pos_z / scale];
                boxes.push(scene_box(&p.item, pallet.id, anchor, scale));
            }
            max_height = max_height.max(pallet.final_height);
        }

        let last_offset = plan
            .pallets
            .last()
            .map_or(0.0, |p| p.drawing_offset_x / scale);
        let center = (last_offset + base.length() / scale) / 2.0;
        let height = max_height / scale;

        Self {
            scale,
            boxes,
            camera: Camera {
                position: [center * 2.5, height * 1.5, center * 2.5],
                target: [center, height / 2.0, 0.0],
            },
        }
    }
}

/// `anchor` is the bottom-face center; the box center sits half a height above it.
fn scene_box(item: &ItemSpec, pallet: usize, anchor: [f64; 3], scale: f64) -> SceneBox {
    let d = *item.dimensions() / scale;
    SceneBox {
        id: item.id().clone(),
        pallet,
        size: [d.x, d.z, d.y],
        center: [anchor[0], anchor[1] + d.z / 2.0, anchor[2]],
        color: item.color(),
    }
}
