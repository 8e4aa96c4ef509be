use crate::geometry::Transformation;
use crate::geometry::geo_traits::{LocalBounds, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// A single sketch entity
#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    Circle { center: Point, radius: f64 },
    LineSegment { start: Point, end: Point },
    /// Circular arc from `start` to `end` around `center`
    Arc { center: Point, start: Point, end: Point },
    /// Standalone sketch point
    Point(Point),
}

impl Curve {
    /// The points that define the curve. A circle's radius is not a point and is left out.
    pub fn control_points(&self) -> Vec<Point> {
        match self {
            Curve::Circle { center, .. } => vec![*center],
            Curve::LineSegment { start, end } => vec![*start, *end],
            Curve::Arc { center, start, end } => vec![*center, *start, *end],
            Curve::Point(p) => vec![*p],
        }
    }

    /// All defining values are finite and the radius (if any) is non-negative.
    pub fn is_readable(&self) -> bool {
        let radius_ok = match self {
            Curve::Circle { radius, .. } => radius.is_finite() && *radius >= 0.0,
            _ => true,
        };
        radius_ok && self.control_points().iter().all(Point::is_finite)
    }
}

impl LocalBounds for Curve {
    fn local_bounds(&self) -> Option<Rect> {
        //an arc is bounded through its center and start point only, its end point may be unreadable
        let bounded = match self {
            Curve::Arc { center, start, .. } => center.is_finite() && start.is_finite(),
            _ => self.is_readable(),
        };
        if !bounded {
            return None;
        }
        let bounds = match self {
            Curve::Circle { center, radius } => Rect::around(*center, *radius),
            Curve::LineSegment { start, end } => Rect::spanning(*start, *end),
            //full circle through the start point, the sweep of the arc is not taken into account
            Curve::Arc { center, start, .. } => Rect::around(*center, center.distance(start)),
            Curve::Point(p) => Rect::spanning(*p, *p),
        };
        Some(bounds)
    }
}

impl Transformable for Curve {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            Curve::Circle { center, radius: _ } => {
                center.transform(t);
            }
            Curve::LineSegment { start, end } => {
                start.transform(t);
                end.transform(t);
            }
            Curve::Arc { center, start, end } => {
                center.transform(t);
                start.transform(t);
                end.transform(t);
            }
            Curve::Point(p) => {
                p.transform(t);
            }
        }
        self
    }
}
