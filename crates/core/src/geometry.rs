//! Item and pallet base geometry.

use crate::config::PalletLimits;
use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog identifier of an article ("Artikel-Nr").
pub type ItemId = String;

/// Catalog unit label that marks a pallet base rather than loadable cargo.
pub const PALLET_UNIT: &str = "Palette";

/// An immutable catalog article.
///
/// Dimensions are stored as (length, width, height) in centimetres; the
/// length runs along the pallet's long axis, the width along its depth axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemSpec {
    /// Article identifier.
    id: ItemId,

    /// Display name.
    name: String,

    /// Dimensions (length, width, height) in cm.
    dimensions: Vector3<f64>,

    /// Weight in kg.
    weight: f64,

    /// Display color as 0xRRGGBB. Irrelevant to packing.
    color: u32,

    /// Catalog unit label (e.g. "Stk", "Palette").
    unit: String,
}

impl ItemSpec {
    /// Creates a new item with the given ID and dimensions.
    pub fn new(id: impl Into<ItemId>, length: f64, width: f64, height: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dimensions: Vector3::new(length, width, height),
            weight: 0.0,
            color: 0x808080,
            unit: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weight in kg.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Sets the catalog unit label.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the display color.
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Returns the catalog unit label.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns true if the catalog marks this article as a pallet base.
    pub fn is_pallet(&self) -> bool {
        self.unit.trim().eq_ignore_ascii_case(PALLET_UNIT)
    }

    /// Returns the volume in cm³.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns true if the footprint exceeds the given length or width.
    pub fn overhangs(&self, length: f64, width: f64) -> bool {
        self.length() > length || self.width() > width
    }

    /// Validates the item and returns an error if it cannot be packed.
    pub fn validate(&self) -> Result<()> {
        let d = &self.dimensions;
        if !(d.x.is_finite() && d.y.is_finite() && d.z.is_finite()) {
            return Err(Error::invalid_entry(
                &self.id,
                "all dimensions must be finite",
            ));
        }

        if d.x <= 0.0 || d.y <= 0.0 || d.z <= 0.0 {
            return Err(Error::invalid_entry(
                &self.id,
                "all dimensions must be positive",
            ));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::invalid_entry(
                &self.id,
                "weight must be finite and not negative",
            ));
        }

        Ok(())
    }
}

/// The empty transport unit every pallet is built on.
///
/// Its footprint is the nominal row/layer area of a pallet and its height is
/// the floor of the first layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletBase {
    spec: ItemSpec,
}

impl PalletBase {
    /// Designates a catalog item as the pallet base.
    pub fn new(spec: ItemSpec) -> Self {
        Self { spec }
    }

    /// Returns the underlying catalog item.
    pub fn spec(&self) -> &ItemSpec {
        &self.spec
    }

    /// Returns the base length.
    pub fn length(&self) -> f64 {
        self.spec.length()
    }

    /// Returns the base width.
    pub fn width(&self) -> f64 {
        self.spec.width()
    }

    /// Returns the base height (the floor of the first layer).
    pub fn height(&self) -> f64 {
        self.spec.height()
    }

    /// Returns the empty pallet weight.
    pub fn weight(&self) -> f64 {
        self.spec.weight()
    }

    /// Validates the base against the unit limits.
    pub fn validate(&self, limits: &PalletLimits) -> Result<()> {
        self.spec
            .validate()
            .map_err(|e| Error::InvalidPalletBase(e.to_string()))?;

        if self.length() > limits.max_length
            || self.width() > limits.max_width
            || self.height() > limits.max_height
        {
            return Err(Error::InvalidPalletBase(format!(
                "'{}' ({}x{}x{} cm) exceeds the unit limits {}x{}x{} cm",
                self.spec.id(),
                self.length(),
                self.width(),
                self.height(),
                limits.max_length,
                limits.max_width,
                limits.max_height
            )));
        }

        Ok(())
    }
}

impl From<ItemSpec> for PalletBase {
    fn from(spec: ItemSpec) -> Self {
        Self::new(spec)
    }
}
