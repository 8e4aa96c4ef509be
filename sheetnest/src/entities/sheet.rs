use anyhow::{Result, ensure};

use crate::geometry::primitives::Rect;

/// Rectangular stock sheet together with the spacing rules parts are laid out under.
/// All distances share a single unit, conversion is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetSpec {
    pub width: f64,
    pub height: f64,
    /// Empty margin kept between any part and the sheet's outer edge
    pub edge_clearance: f64,
    /// Empty spacing kept between adjacent parts
    pub gutter: f64,
    /// Added to both the width and height of every part footprint before layout
    pub kerf_compensation: f64,
}

impl SheetSpec {
    pub fn try_new(width: f64, height: f64, edge_clearance: f64, gutter: f64) -> Result<Self> {
        let sheet = SheetSpec {
            width,
            height,
            edge_clearance,
            gutter,
            kerf_compensation: 0.0,
        };
        sheet.validate()?;
        Ok(sheet)
    }

    pub fn with_kerf_compensation(mut self, kerf_compensation: f64) -> Result<Self> {
        self.kerf_compensation = kerf_compensation;
        self.validate()?;
        Ok(self)
    }

    /// Rejects sheets that cannot be nested on.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.width > 0.0,
            "sheet width must be positive, got {}",
            self.width
        );
        ensure!(
            self.height.is_finite() && self.height > 0.0,
            "sheet height must be positive, got {}",
            self.height
        );
        ensure!(
            self.edge_clearance.is_finite() && self.edge_clearance >= 0.0,
            "edge clearance must be non-negative, got {}",
            self.edge_clearance
        );
        ensure!(
            self.gutter.is_finite() && self.gutter >= 0.0,
            "gutter must be non-negative, got {}",
            self.gutter
        );
        ensure!(
            self.kerf_compensation.is_finite() && self.kerf_compensation >= 0.0,
            "kerf compensation must be non-negative, got {}",
            self.kerf_compensation
        );
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The region parts are allowed to occupy: the sheet shrunk by the edge clearance on every side.
    /// The rectangle is degenerate (or inverted) when the clearance consumes the whole sheet.
    pub fn usable_region(&self) -> Rect {
        Rect {
            x_min: self.edge_clearance,
            y_min: self.edge_clearance,
            x_max: self.width - self.edge_clearance,
            y_max: self.height - self.edge_clearance,
        }
    }

    /// The sheet outline, with its lower-left corner at the origin.
    pub fn outline(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
