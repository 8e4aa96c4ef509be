use log::warn;

use crate::entities::Sketch;
use crate::geometry::geo_traits::LocalBounds;
use crate::geometry::primitives::{Curve, Point};
use crate::io::ext_repr::{ExtCurve, ExtSketch};

/// A sketch brought into the library, with the number of curves that could not be fully read.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedSketch {
    pub sketch: Sketch,
    pub n_unreadable: usize,
}

/// Converts an external curve, [`None`] if it has no usable geometry.
///
/// An arc missing only its end point is still imported (with a NaN end point): it contributes to the
/// bounds of its sketch but is not readable, so it is skipped when transformed.
pub fn import_curve(ext_curve: &ExtCurve) -> Option<Curve> {
    let curve = match *ext_curve {
        ExtCurve::Circle { center, radius } => Curve::Circle {
            center: Point::from(center?),
            radius: radius?,
        },
        ExtCurve::Line { start, end } => Curve::LineSegment {
            start: Point::from(start?),
            end: Point::from(end?),
        },
        ExtCurve::Arc { center, start, end } => Curve::Arc {
            center: Point::from(center?),
            start: Point::from(start?),
            end: end.map_or(Point(f64::NAN, f64::NAN), Point::from),
        },
        ExtCurve::Point { position } => Curve::Point(Point::from(position?)),
    };
    curve.local_bounds().is_some().then_some(curve)
}

/// Imports a sketch, skipping curves without usable geometry.
/// Every curve that is not fully readable, kept or not, counts towards [`ImportedSketch::n_unreadable`].
pub fn import_sketch(ext_sketch: &ExtSketch) -> ImportedSketch {
    let total = ext_sketch.curves.len();
    let curves: Vec<Curve> = ext_sketch.curves.iter().filter_map(import_curve).collect();
    let n_unreadable = total - curves.iter().filter(|c| c.is_readable()).count();

    if n_unreadable > 0 {
        warn!(
            "[IMPORT] sketch {}: {} of {} curves could not be fully read",
            ext_sketch.name, n_unreadable, total
        );
    }

    ImportedSketch {
        sketch: Sketch::new(ext_sketch.name.clone(), curves),
        n_unreadable,
    }
}
