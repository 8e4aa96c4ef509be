use crate::geometry::compute_bounds;
use crate::geometry::primitives::{Curve, Rect};

/// A named, ordered collection of curves.
/// Order does not matter for the bounds, but is kept so emitted geometry is deterministic.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sketch {
    pub name: String,
    pub curves: Vec<Curve>,
}

impl Sketch {
    pub fn new(name: impl Into<String>, curves: Vec<Curve>) -> Self {
        Self {
            name: name.into(),
            curves,
        }
    }

    /// Bounding box of all readable curves, see [`compute_bounds`].
    pub fn bbox(&self) -> Option<Rect> {
        compute_bounds(&self.curves)
    }
}
