use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::Point;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle spanning two corners, which may coincide (degenerate rectangle).
    pub fn spanning(c1: Point, c2: Point) -> Self {
        Rect {
            x_min: f64::min(c1.x(), c2.x()),
            y_min: f64::min(c1.y(), c2.y()),
            x_max: f64::max(c1.x(), c2.x()),
            y_max: f64::max(c1.y(), c2.y()),
        }
    }

    /// Square of half-width `radius` centered at `center`.
    pub fn around(center: Point, radius: f64) -> Self {
        let Point(x, y) = center;
        Rect {
            x_min: x - radius,
            y_min: y - radius,
            x_max: x + radius,
            y_max: y + radius,
        }
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    /// Returns a copy where every axis narrower than `min_span` has its maximum moved to `min + min_span`.
    pub fn widened_to(mut self, min_span: f64) -> Self {
        if self.width() < min_span {
            self.x_max = self.x_min + min_span;
        }
        if self.height() < min_span {
            self.y_max = self.y_min + min_span;
        }
        self
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The lower-left corner
    pub fn min_corner(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    /// Returns the four corners of `self`, counter-clockwise starting from the lower-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }
}
