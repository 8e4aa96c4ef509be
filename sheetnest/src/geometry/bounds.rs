use log::debug;

use crate::geometry::geo_traits::LocalBounds;
use crate::geometry::primitives::{Curve, Rect};

/// Minimum width and height of a computed bounding box, in sheet units.
pub const MIN_SPAN: f64 = 0.01;

/// Computes the axis-aligned bounding box of a collection of curves.
///
/// Curves whose geometry cannot be read are skipped.
/// Returns [`None`] when no curve contributed any bounds (empty or fully unreadable input).
/// Boxes narrower than [`MIN_SPAN`] along an axis are widened so every footprint is strictly positive.
pub fn compute_bounds<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Option<Rect> {
    let mut n_skipped = 0;
    let bounds = curves
        .into_iter()
        .filter_map(|c| {
            let b = c.local_bounds();
            if b.is_none() {
                n_skipped += 1;
            }
            b
        })
        .reduce(Rect::bounding_rect);

    if n_skipped > 0 {
        debug!("[BOUNDS] skipped {n_skipped} unreadable curve(s)");
    }

    bounds.map(|b| b.widened_to(MIN_SPAN))
}
