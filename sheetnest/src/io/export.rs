use crate::entities::{NestStatus, NestingResult, Placement, Sketch};
use crate::geometry::primitives::Curve;
use crate::io::ext_repr::{ExtCurve, ExtNestStatus, ExtNestingResult, ExtPlacement, ExtSketch};

pub fn export_curve(curve: &Curve) -> ExtCurve {
    match *curve {
        Curve::Circle { center, radius } => ExtCurve::Circle {
            center: Some(center.into()),
            radius: Some(radius),
        },
        Curve::LineSegment { start, end } => ExtCurve::Line {
            start: Some(start.into()),
            end: Some(end.into()),
        },
        Curve::Arc { center, start, end } => ExtCurve::Arc {
            center: Some(center.into()),
            start: Some(start.into()),
            end: Some(end.into()),
        },
        Curve::Point(p) => ExtCurve::Point {
            position: Some(p.into()),
        },
    }
}

pub fn export_sketch(sketch: &Sketch) -> ExtSketch {
    ExtSketch {
        name: sketch.name.clone(),
        curves: sketch.curves.iter().map(export_curve).collect(),
    }
}

/// Exports a nesting result out of the library
pub fn export_result(result: &NestingResult) -> ExtNestingResult {
    ExtNestingResult {
        placements: result.placements.iter().map(export_placement).collect(),
        rotated: result.rotated,
        rows: result.rows,
        columns: result.columns,
        utilization: result.utilization_percent,
        unused_area: result.unused_area,
        status: export_status(result.status),
    }
}

fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        part_id: placement.part_id.clone(),
        x: placement.x,
        y: placement.y,
        rotated: placement.rotated,
    }
}

fn export_status(status: NestStatus) -> ExtNestStatus {
    match status {
        NestStatus::Complete => ExtNestStatus::Complete,
        NestStatus::Partial => ExtNestStatus::Partial,
        NestStatus::SheetExhausted => ExtNestStatus::SheetExhausted,
        NestStatus::PartTooLarge => ExtNestStatus::PartTooLarge,
        NestStatus::OutOfBounds => ExtNestStatus::OutOfBounds,
    }
}
