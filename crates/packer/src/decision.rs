//! Placement decision procedure.
//!
//! [`decide`] inspects a [`PackingState`] and returns the next step for one
//! item without mutating anything; [`PackingState::apply`] performs it. The
//! policy order is:
//!
//! 1. empty pallet: center the item, or overflow;
//! 2. full layer: open the next layer if the item fits above it, or overflow;
//! 3. same row, then new row, then close the layer.
//!
//! Apart from the centered first item, every placement stays inside the
//! pallet's usable footprint along both axes.

use crate::state::PackingState;
use u_pallet_core::footprint::{Footprint, FOOTPRINT_EPSILON};
use u_pallet_core::{ItemSpec, PalletLimits};

/// Why the current pallet cannot take an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowReason {
    /// The item would end above the maximum height.
    Height,
    /// The item would push the footprint envelope past the maximum.
    Footprint,
    /// The item is larger than the base footprint and the pallet is not empty.
    Overhang,
}

/// One step of the placement loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attempt {
    /// Place the item centered on the empty pallet.
    Center,
    /// Append the item to the active row at the given center offsets.
    Append {
        /// Center offset along the length axis.
        pos_l: f64,
        /// Center offset along the depth axis.
        pos_z: f64,
        /// Footprint envelope `(max_l, max_b)` after placement.
        envelope: (f64, f64),
    },
    /// Start a new row in the active layer.
    AdvanceRow,
    /// Mark the active layer as full.
    CloseLayer,
    /// Start a new layer on top of the full one.
    OpenLayer,
    /// The pallet cannot take the item.
    Overflow(OverflowReason),
}

impl Attempt {
    /// Returns true if applying this attempt places the item.
    pub fn places_item(&self) -> bool {
        matches!(self, Self::Center | Self::Append { .. })
    }
}

/// Decides the next step for `item` on the pallet described by `state`.
pub fn decide(state: &PackingState, item: &ItemSpec, limits: &PalletLimits) -> Attempt {
    let (l, w, h) = (item.length(), item.width(), item.height());
    let height_okay = state.next_stack_height() + h <= limits.max_height + FOOTPRINT_EPSILON;
    let (max_l, max_b) = state.envelope();

    if state.is_empty() {
        let candidate_l = max_l.max(l);
        let candidate_b = max_b.max(w);
        let dimension_okay = candidate_l <= limits.max_length + FOOTPRINT_EPSILON
            && candidate_b <= limits.max_width + FOOTPRINT_EPSILON;

        return match (height_okay, dimension_okay) {
            (true, true) => Attempt::Center,
            (false, _) => Attempt::Overflow(OverflowReason::Height),
            (true, false) => Attempt::Overflow(OverflowReason::Footprint),
        };
    }

    let (base_l, base_b) = state.base_footprint();
    if item.overhangs(base_l + FOOTPRINT_EPSILON, base_b + FOOTPRINT_EPSILON) {
        return Attempt::Overflow(OverflowReason::Overhang);
    }

    if state.is_layer_full() {
        return if height_okay {
            Attempt::OpenLayer
        } else {
            Attempt::Overflow(OverflowReason::Height)
        };
    }

    if !height_okay {
        return Attempt::Overflow(OverflowReason::Height);
    }

    let fits_row = l <= state.remaining_length() + FOOTPRINT_EPSILON
        && w <= state.remaining_row_depth() + FOOTPRINT_EPSILON;
    if fits_row {
        let (x_cursor, z_cursor, _) = state.cursors();
        let pos_l = x_cursor + l / 2.0;
        let pos_z = z_cursor + w / 2.0;

        let (item_l, item_b) = Footprint::centered(pos_l, pos_z, l, w).centered_extent();
        let envelope = (max_l.max(item_l), max_b.max(item_b));
        if envelope.0 > limits.max_length + FOOTPRINT_EPSILON
            || envelope.1 > limits.max_width + FOOTPRINT_EPSILON
        {
            return Attempt::Overflow(OverflowReason::Footprint);
        }

        return Attempt::Append {
            pos_l,
            pos_z,
            envelope,
        };
    }

    if w <= state.remaining_depth() + FOOTPRINT_EPSILON {
        return Attempt::AdvanceRow;
    }

    Attempt::CloseLayer
}
