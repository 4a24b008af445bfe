//! Per-pallet cursor state of the layer/row packer.

use crate::aggregate::{pallet_height, pallet_weight};
use crate::decision::Attempt;
use u_pallet_core::{ItemPlacement, ItemSpec, PalletBase, PalletId, PalletPlan};

/// Mutable placement state of the pallet currently being filled.
///
/// All positions are relative to the pallet center; heights are measured
/// from the floor. The state is owned by one packing run and consumed by
/// [`PackingState::finalize`].
#[derive(Debug, Clone)]
pub struct PackingState {
    id: PalletId,
    drawing_offset_x: f64,

    /// Nominal footprint of the base; larger items are overhangs.
    base_length: f64,
    base_width: f64,

    /// Footprint available to rows and layers, fixed by the first item.
    usable_length: f64,
    usable_width: f64,

    /// Base height of the active layer.
    current_h: f64,
    /// Tallest item in the active layer.
    layer_height: f64,
    x_cursor: f64,
    z_cursor: f64,
    max_z_in_row: f64,
    is_layer_full: bool,

    /// Running footprint envelope (centered on the pallet).
    max_l: f64,
    max_b: f64,

    items: Vec<ItemPlacement>,
}

impl PackingState {
    /// Opens an empty pallet on `base`.
    pub fn new(id: PalletId, base: &PalletBase, drawing_offset_x: f64) -> Self {
        let length = base.length();
        let width = base.width();
        Self {
            id,
            drawing_offset_x,
            base_length: length,
            base_width: width,
            usable_length: length,
            usable_width: width,
            current_h: base.height(),
            layer_height: 0.0,
            x_cursor: -length / 2.0,
            z_cursor: -width / 2.0,
            max_z_in_row: -width / 2.0,
            is_layer_full: false,
            max_l: length,
            max_b: width,
            items: Vec::new(),
        }
    }

    /// Returns the pallet id.
    pub fn id(&self) -> PalletId {
        self.id
    }

    /// Returns the lay-out offset of this pallet.
    pub fn drawing_offset_x(&self) -> f64 {
        self.drawing_offset_x
    }

    /// Returns true if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the placements so far.
    pub fn items(&self) -> &[ItemPlacement] {
        &self.items
    }

    /// Returns the base height of the active layer.
    pub fn current_h(&self) -> f64 {
        self.current_h
    }

    /// Returns the height of the tallest item in the active layer.
    pub fn layer_height(&self) -> f64 {
        self.layer_height
    }

    /// Returns true once the active layer's footprint is exhausted.
    pub fn is_layer_full(&self) -> bool {
        self.is_layer_full
    }

    /// Returns the row cursors `(x_cursor, z_cursor, max_z_in_row)`.
    pub fn cursors(&self) -> (f64, f64, f64) {
        (self.x_cursor, self.z_cursor, self.max_z_in_row)
    }

    /// Returns the running footprint envelope `(max_l, max_b)`.
    pub fn envelope(&self) -> (f64, f64) {
        (self.max_l, self.max_b)
    }

    /// Returns the nominal base footprint `(length, width)`.
    pub fn base_footprint(&self) -> (f64, f64) {
        (self.base_length, self.base_width)
    }

    /// Height at which the next item would be based: the active layer, or
    /// the next one if the active layer is full.
    pub fn next_stack_height(&self) -> f64 {
        if self.is_layer_full {
            self.current_h + self.layer_height
        } else {
            self.current_h
        }
    }

    /// Free length between the row cursor and the half-length edge.
    pub fn remaining_length(&self) -> f64 {
        self.usable_length / 2.0 - self.x_cursor
    }

    /// Free depth between the active row's start and the half-width edge.
    pub fn remaining_row_depth(&self) -> f64 {
        self.usable_width / 2.0 - self.z_cursor
    }

    /// Free depth between the deepest row extent and the half-width edge.
    pub fn remaining_depth(&self) -> f64 {
        self.usable_width / 2.0 - self.max_z_in_row
    }

    /// Applies a decision for `item`.
    pub fn apply(&mut self, attempt: Attempt, item: &ItemSpec) {
        match attempt {
            Attempt::Center => {
                let (l, w, h) = (item.length(), item.width(), item.height());
                self.items
                    .push(ItemPlacement::new(item.clone(), 0.0, 0.0, self.current_h));
                self.layer_height = h;
                self.max_l = self.max_l.max(l);
                self.max_b = self.max_b.max(w);
                self.usable_length = self.max_l;
                self.usable_width = self.max_b;
                // The row continues right of the centered item.
                self.x_cursor = l / 2.0;
                self.z_cursor = -w / 2.0;
                self.max_z_in_row = w / 2.0;
            }
            Attempt::Append {
                pos_l,
                pos_z,
                envelope,
            } => {
                self.items
                    .push(ItemPlacement::new(item.clone(), pos_l, pos_z, self.current_h));
                self.x_cursor += item.length();
                self.max_z_in_row = self.max_z_in_row.max(self.z_cursor + item.width());
                self.layer_height = self.layer_height.max(item.height());
                self.max_l = envelope.0;
                self.max_b = envelope.1;
            }
            Attempt::AdvanceRow => {
                self.x_cursor = -self.usable_length / 2.0;
                self.z_cursor = self.max_z_in_row;
            }
            Attempt::CloseLayer => {
                self.is_layer_full = true;
            }
            Attempt::OpenLayer => {
                self.current_h += self.layer_height;
                self.layer_height = item.height();
                self.x_cursor = -self.usable_length / 2.0;
                self.z_cursor = -self.usable_width / 2.0;
                self.max_z_in_row = -self.usable_width / 2.0;
                self.is_layer_full = false;
            }
            Attempt::Overflow(_) => {}
        }
    }

    /// Freezes the pallet into a read-only plan.
    pub fn finalize(self, base: &PalletBase) -> PalletPlan {
        PalletPlan {
            id: self.id,
            final_height: pallet_height(&self.items, base),
            final_weight: pallet_weight(&self.items, base),
            items: self.items,
            max_l: self.max_l,
            max_b: self.max_b,
            drawing_offset_x: self.drawing_offset_x,
        }
    }
}
