use serde::{Deserialize, Serialize};

/// External representation of a [`Curve`](crate::geometry::primitives::Curve).
/// Control points may be missing (`null` or absent), such curves are unreadable and skipped on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ExtCurve {
    Circle {
        center: Option<(f64, f64)>,
        radius: Option<f64>,
    },
    Line {
        start: Option<(f64, f64)>,
        end: Option<(f64, f64)>,
    },
    Arc {
        center: Option<(f64, f64)>,
        start: Option<(f64, f64)>,
        end: Option<(f64, f64)>,
    },
    Point {
        position: Option<(f64, f64)>,
    },
}

/// External representation of a [`Sketch`](crate::entities::Sketch).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSketch {
    pub name: String,
    #[serde(default)]
    pub curves: Vec<ExtCurve>,
}

/// External representation of a [`Placement`](crate::entities::Placement).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    pub part_id: String,
    /// Lower-left corner of the footprint on the sheet
    pub x: f64,
    pub y: f64,
    pub rotated: bool,
}

/// External representation of a [`NestStatus`](crate::entities::NestStatus).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtNestStatus {
    Complete,
    Partial,
    SheetExhausted,
    PartTooLarge,
    OutOfBounds,
}

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtNestingResult {
    pub placements: Vec<ExtPlacement>,
    pub rotated: bool,
    pub rows: usize,
    pub columns: usize,
    /// Percentage of the sheet area covered by parts
    pub utilization: f64,
    pub unused_area: f64,
    pub status: ExtNestStatus,
}
