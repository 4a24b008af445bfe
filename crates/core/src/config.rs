//! Engine configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Catalog identifier of the default pallet base (Euro pallet).
pub const DEFAULT_BASE_ID: &str = "PAL-EU";

/// Maximum extents of a loaded unit, in cm.
///
/// The footprint limits are larger than a nominal pallet so that a single
/// overhanging item can be carried centered on an otherwise empty unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletLimits {
    /// Maximum length (long axis).
    pub max_length: f64,
    /// Maximum width (depth axis).
    pub max_width: f64,
    /// Maximum height measured from the floor, pallet base included.
    pub max_height: f64,
}

impl PalletLimits {
    /// Default maximum length.
    pub const DEFAULT_MAX_LENGTH: f64 = 285.0;
    /// Default maximum width.
    pub const DEFAULT_MAX_WIDTH: f64 = 180.0;
    /// Default maximum height.
    pub const DEFAULT_MAX_HEIGHT: f64 = 160.0;

    /// Creates limits from explicit values.
    pub fn new(max_length: f64, max_width: f64, max_height: f64) -> Self {
        Self {
            max_length,
            max_width,
            max_height,
        }
    }

    /// Validates that all limits are finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("max_length", self.max_length),
            ("max_width", self.max_width),
            ("max_height", self.max_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PalletLimits {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            max_width: Self::DEFAULT_MAX_WIDTH,
            max_height: Self::DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Configuration for a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Unit capacity limits.
    pub limits: PalletLimits,

    /// Catalog identifier of the pallet base.
    pub base_id: String,

    /// Lay-out distance between neighbouring pallets, as a multiple of the
    /// base length. Presentation only.
    pub layout_spacing: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: PalletLimits::default(),
            base_id: DEFAULT_BASE_ID.to_string(),
            layout_spacing: 1.5,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all unit limits.
    pub fn with_limits(mut self, limits: PalletLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the maximum unit length.
    pub fn with_max_length(mut self, max_length: f64) -> Self {
        self.limits.max_length = max_length;
        self
    }

    /// Sets the maximum unit width.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.limits.max_width = max_width;
        self
    }

    /// Sets the maximum unit height.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.limits.max_height = max_height;
        self
    }

    /// Sets the catalog identifier of the pallet base.
    pub fn with_base_id(mut self, base_id: impl Into<String>) -> Self {
        self.base_id = base_id.into();
        self
    }

    /// Sets the lay-out spacing factor.
    pub fn with_layout_spacing(mut self, spacing: f64) -> Self {
        self.layout_spacing = spacing;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;

        if self.base_id.trim().is_empty() {
            return Err(Error::ConfigError("base_id must not be empty".into()));
        }

        if !self.layout_spacing.is_finite() || self.layout_spacing <= 0.0 {
            return Err(Error::ConfigError(format!(
                "layout_spacing must be finite and positive, got {}",
                self.layout_spacing
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.limits.max_length, 285.0);
        assert_eq!(config.limits.max_width, 180.0);
        assert_eq!(config.limits.max_height, 160.0);
        assert_eq!(config.base_id, "PAL-EU");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new()
            .with_max_length(240.0)
            .with_max_width(120.0)
            .with_max_height(200.0)
            .with_base_id("PAL-IND")
            .with_layout_spacing(2.0);

        assert_eq!(config.limits, PalletLimits::new(240.0, 120.0, 200.0));
        assert_eq!(config.base_id, "PAL-IND");
        assert_eq!(config.layout_spacing, 2.0);
    }

    #[test]
    fn test_invalid_limits() {
        let config = Config::new().with_max_height(0.0);
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let config = Config::new().with_max_length(f64::INFINITY);
        assert!(config.validate().is_err());

        let config = Config::new().with_layout_spacing(-1.0);
        assert!(config.validate().is_err());
    }
}
