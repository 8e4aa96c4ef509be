use anyhow::Result;
use serde::{Deserialize, Serialize};

use sheetnest::entities::SheetSpec;
use sheetnest::nesting::NestingMode;

/// Configuration of a nesting job
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct NestConfig {
    /// Flavour of grid nesting
    pub mode: NestingMode,
    /// Which nesting algorithm to run
    pub strategy: Strategy,
    /// Unit of the sheet dimensions, clearance, gutter and the sketch geometry
    pub units: Units,
    /// Stock material, determines the sheet dimensions unless [`MaterialPreset::Custom`]
    pub material: MaterialPreset,
    /// Sheet width in `units`, only used with [`MaterialPreset::Custom`]
    pub sheet_width: f64,
    /// Sheet height in `units`, only used with [`MaterialPreset::Custom`]
    pub sheet_height: f64,
    /// Empty margin along the sheet edges, in `units`
    pub edge_clearance: f64,
    /// Empty spacing between parts, in `units`
    pub gutter: f64,
    /// Kerf compensation added to every part footprint, always in millimetres
    pub kerf_mm: f64,
    /// Copies requested for a part that does not specify its own quantity
    pub quantity: usize,
    /// Draw the sheet outline into the layout sketch
    pub border: bool,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            mode: NestingMode::Simple,
            strategy: Strategy::Auto,
            units: Units::Cm,
            material: MaterialPreset::SteelSheet,
            sheet_width: 300.0,
            sheet_height: 200.0,
            edge_clearance: 1.0,
            gutter: 0.8,
            kerf_mm: 0.0,
            quantity: 10,
            border: true,
        }
    }
}

impl NestConfig {
    /// Sheet width and height in `units`
    pub fn sheet_dimensions(&self) -> (f64, f64) {
        match self.material.dimensions_mm() {
            Some((w, h)) => (self.units.convert_from_mm(w), self.units.convert_from_mm(h)),
            None => (self.sheet_width, self.sheet_height),
        }
    }

    /// Builds the sheet to nest on, everything expressed in `units`.
    pub fn sheet_spec(&self) -> Result<SheetSpec> {
        let (width, height) = self.sheet_dimensions();
        SheetSpec::try_new(width, height, self.edge_clearance, self.gutter)?
            .with_kerf_compensation(self.units.convert_from_mm(self.kerf_mm))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Grid nesting for a single part, shelf packing for several
    #[default]
    Auto,
    Grid,
    Shelf,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    Mm,
    #[default]
    Cm,
    M,
}

impl Units {
    pub fn mm_per_unit(&self) -> f64 {
        match self {
            Units::Mm => 1.0,
            Units::Cm => 10.0,
            Units::M => 1000.0,
        }
    }

    /// Converts a length in millimetres to this unit.
    pub fn convert_from_mm(&self, mm: f64) -> f64 {
        mm / self.mm_per_unit()
    }

    /// Converts a length in this unit to millimetres.
    pub fn convert_to_mm(&self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }
}

/// Common stock sheets
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    #[default]
    SteelSheet,
    AluminumSheet,
    Plywood,
    Acrylic,
    /// Dimensions taken from [`NestConfig::sheet_width`] and [`NestConfig::sheet_height`]
    Custom,
}

impl MaterialPreset {
    /// Width and height of the stock sheet in millimetres, [`None`] for [`MaterialPreset::Custom`]
    pub fn dimensions_mm(&self) -> Option<(f64, f64)> {
        match self {
            MaterialPreset::SteelSheet => Some((3000.0, 2000.0)),
            MaterialPreset::AluminumSheet => Some((2500.0, 1250.0)),
            MaterialPreset::Plywood => Some((2440.0, 1220.0)),
            MaterialPreset::Acrylic => Some((1000.0, 600.0)),
            MaterialPreset::Custom => None,
        }
    }
}
