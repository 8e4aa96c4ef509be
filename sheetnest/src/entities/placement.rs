use crate::geometry::primitives::Rect;

/// Where a copy of a part goes on the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub part_id: String,
    /// Lower-left corner of the (possibly turned) footprint in sheet coordinates
    pub x: f64,
    pub y: f64,
    /// The part is turned a quarter clockwise
    pub rotated: bool,
}

impl Placement {
    pub fn new(part_id: impl Into<String>, x: f64, y: f64, rotated: bool) -> Self {
        Self {
            part_id: part_id.into(),
            x,
            y,
            rotated,
        }
    }

    /// Translation to apply to a part with bounding box `bbox` so that it lands on this placement.
    pub fn offset(&self, bbox: &Rect) -> (f64, f64) {
        (self.x - bbox.x_min, self.y - bbox.y_min)
    }

    /// Rectangle occupied on the sheet by a footprint of `width` by `height` (given unturned).
    pub fn occupied(&self, (width, height): (f64, f64)) -> Rect {
        let (w, h) = match self.rotated {
            false => (width, height),
            true => (height, width),
        };
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + w,
            y_max: self.y + h,
        }
    }
}
