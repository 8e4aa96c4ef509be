use anyhow::Result;

use crate::entities::{SheetSpec, Sketch};
use crate::geometry::primitives::Rect;

/// A part to nest: an identifier, the bounding box of its outline and how many copies are wanted.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub id: String,
    pub bbox: Rect,
    pub quantity: usize,
}

impl Part {
    pub fn new(id: impl Into<String>, bbox: Rect, quantity: usize) -> Self {
        Self {
            id: id.into(),
            bbox,
            quantity,
        }
    }

    /// A part with a plain rectangular outline of `width` by `height`.
    pub fn from_dimensions(
        id: impl Into<String>,
        width: f64,
        height: f64,
        quantity: usize,
    ) -> Result<Self> {
        let bbox = Rect::try_new(0.0, 0.0, width, height)?;
        Ok(Self::new(id, bbox, quantity))
    }

    /// Derives a part with id `id` from the bounding box of a sketch.
    /// Returns [`None`] if the sketch has no readable geometry.
    pub fn from_sketch(id: impl Into<String>, sketch: &Sketch, quantity: usize) -> Option<Self> {
        sketch.bbox().map(|bbox| Self::new(id, bbox, quantity))
    }

    /// Width and height of the space the part claims on `sheet`, kerf compensation included.
    pub fn footprint(&self, sheet: &SheetSpec) -> (f64, f64) {
        (
            self.bbox.width() + sheet.kerf_compensation,
            self.bbox.height() + sheet.kerf_compensation,
        )
    }
}
