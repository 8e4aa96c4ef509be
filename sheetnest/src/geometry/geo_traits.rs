use crate::geometry::Transformation;
use crate::geometry::primitives::Rect;

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}

/// Trait for shapes that can report their own axis-aligned extent.
pub trait LocalBounds {
    /// Axis-aligned bounds of the shape, [`None`] if its defining points cannot be read.
    /// The returned rectangle may be degenerate (zero width or height).
    fn local_bounds(&self) -> Option<Rect>;
}
