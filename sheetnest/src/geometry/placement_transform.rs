use log::warn;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Curve, Rect};

/// Curves moved into place, together with the number of curves that could not be read and were left out.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TransformedCurves {
    pub curves: Vec<Curve>,
    pub n_skipped: usize,
}

/// Builds the transformation which moves a part with bounding box `pivot` by `offset`.
///
/// When `rotate` is set, the part is first turned a quarter clockwise (`(x, y) -> (y, -x)`) about the
/// lower-left corner of `pivot` and shifted up by the width of `pivot`, so the turned part's
/// bounding box keeps the same lower-left corner. The offset is applied last in both cases.
pub fn placement_transformation(pivot: &Rect, offset: (f64, f64), rotate: bool) -> Transformation {
    let t = match rotate {
        false => Transformation::empty(),
        true => Transformation::empty()
            .quarter_turn_cw_about(pivot.min_corner())
            .translate((0.0, pivot.width())),
    };
    t.translate(offset)
}

/// Applies a placement to a set of curves (see [`placement_transformation`]).
///
/// Circles keep their radius, arcs have center and end points transformed independently.
/// Curves whose control points cannot be read are skipped and counted in [`TransformedCurves::n_skipped`].
pub fn apply_transform(
    curves: &[Curve],
    pivot: &Rect,
    offset: (f64, f64),
    rotate: bool,
) -> TransformedCurves {
    let t = placement_transformation(pivot, offset, rotate);
    let (readable, unreadable): (Vec<&Curve>, Vec<&Curve>) =
        curves.iter().partition(|c| c.is_readable());

    if !unreadable.is_empty() {
        warn!(
            "[TRANSFORM] skipping {} unreadable curve(s) out of {}",
            unreadable.len(),
            curves.len()
        );
    }

    TransformedCurves {
        curves: readable.into_iter().map(|c| c.transform_clone(&t)).collect(),
        n_skipped: unreadable.len(),
    }
}
