//! Axis-aligned footprints on the pallet plane.
//!
//! The pallet plane uses the length axis (`l`) and the depth axis (`z`),
//! both measured from the pallet center.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for footprint comparisons, in cm.
pub const FOOTPRINT_EPSILON: f64 = 1e-6;

/// Axis-aligned rectangle on the pallet plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// Minimum coordinate along the length axis.
    pub min_l: f64,
    /// Minimum coordinate along the depth axis.
    pub min_z: f64,
    /// Maximum coordinate along the length axis.
    pub max_l: f64,
    /// Maximum coordinate along the depth axis.
    pub max_z: f64,
}

impl Footprint {
    /// Creates a footprint from min/max coordinates.
    pub fn new(min_l: f64, min_z: f64, max_l: f64, max_z: f64) -> Self {
        Self {
            min_l,
            min_z,
            max_l,
            max_z,
        }
    }

    /// Creates a footprint of the given size centered at `(center_l, center_z)`.
    pub fn centered(center_l: f64, center_z: f64, length: f64, width: f64) -> Self {
        let half_l = length / 2.0;
        let half_w = width / 2.0;
        Self {
            min_l: center_l - half_l,
            min_z: center_z - half_w,
            max_l: center_l + half_l,
            max_z: center_z + half_w,
        }
    }

    /// Returns the extent along the length axis.
    pub fn length(&self) -> f64 {
        self.max_l - self.min_l
    }

    /// Returns the extent along the depth axis.
    pub fn width(&self) -> f64 {
        self.max_z - self.min_z
    }


    /// Returns the extents of the smallest rectangle centered on the pallet
    /// center that still contains this footprint.
    pub fn centered_extent(&self) -> (f64, f64) {
        let l = 2.0 * self.min_l.abs().max(self.max_l.abs());
        let b = 2.0 * self.min_z.abs().max(self.max_z.abs());
        (l, b)
    }

    /// Checks whether the interiors of two footprints overlap.
    ///
    /// Footprints that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_l < other.max_l - FOOTPRINT_EPSILON
            && self.max_l > other.min_l + FOOTPRINT_EPSILON
            && self.min_z < other.max_z - FOOTPRINT_EPSILON
            && self.max_z > other.min_z + FOOTPRINT_EPSILON
    }

    /// Checks whether this footprint lies inside another one.
    pub fn is_within(&self, outer: &Self) -> bool {
        self.min_l >= outer.min_l - FOOTPRINT_EPSILON
            && self.max_l <= outer.max_l + FOOTPRINT_EPSILON
            && self.min_z >= outer.min_z - FOOTPRINT_EPSILON
            && self.max_z <= outer.max_z + FOOTPRINT_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centered() {
        let f = Footprint::centered(10.0, -5.0, 40.0, 30.0);
        assert_relative_eq!(f.min_l, -10.0);
        assert_relative_eq!(f.max_l, 30.0);
        assert_relative_eq!(f.min_z, -20.0);
        assert_relative_eq!(f.max_z, 10.0);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = Footprint::new(-60.0, -40.0, -10.0, 40.0);
        let b = Footprint::new(-10.0, -40.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));

        let c = Footprint::new(-20.0, 0.0, 0.0, 10.0);
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }

    #[test]
    fn test_centered_extent() {
        let f = Footprint::new(-60.0, -40.0, 20.0, 10.0);
        let (l, b) = f.centered_extent();
        assert_relative_eq!(l, 120.0);
        assert_relative_eq!(b, 80.0);
    }

    #[test]
    fn test_within() {
        let outer = Footprint::centered(10.0, 0.0, 30.0, 10.0);
        let a = Footprint::centered(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(outer.length(), 30.0);
        assert!(a.is_within(&outer));
        assert!(!outer.is_within(&a));
    }
}
