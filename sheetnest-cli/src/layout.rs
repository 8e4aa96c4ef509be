use std::collections::HashMap;

use anyhow::{Context, Result};
use itertools::Itertools;

use sheetnest::entities::{NestStatus, NestingResult, SheetSpec, Sketch};
use sheetnest::geometry::apply_transform;
use sheetnest::geometry::primitives::Curve;

use crate::job::JobPart;

/// The layout sketch of a nesting run
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub sketch: Sketch,
    /// Part curves left out because they could not be read
    pub n_skipped: usize,
}

pub fn layout_name(label: &str) -> String {
    format!("Nesting Layout - {label}")
}

/// Outline of the sheet as four line segments, counter-clockwise from the origin.
pub fn border_curves(sheet: &SheetSpec) -> Vec<Curve> {
    sheet
        .outline()
        .corners()
        .into_iter()
        .circular_tuple_windows()
        .map(|(start, end)| Curve::LineSegment { start, end })
        .collect()
}

/// Collects the geometry of every placed copy into a single sketch.
///
/// Each copy is the sketch of its part moved by the placement transform.
/// The sheet border comes first if requested.
pub fn build_layout(
    name: &str,
    sheet: &SheetSpec,
    border: bool,
    parts: &[JobPart],
    result: &NestingResult,
) -> Result<Layout> {
    let parts_by_id: HashMap<&str, &JobPart> =
        parts.iter().map(|p| (p.part.id.as_str(), p)).collect();

    let mut curves = match border {
        true => border_curves(sheet),
        false => vec![],
    };
    let mut n_skipped = 0;

    for placement in &result.placements {
        let job_part = parts_by_id
            .get(placement.part_id.as_str())
            .with_context(|| format!("placement refers to unknown part: {}", placement.part_id))?;
        let bbox = &job_part.part.bbox;
        let moved = apply_transform(
            &job_part.sketch.curves,
            bbox,
            placement.offset(bbox),
            placement.rotated,
        );
        curves.extend(moved.curves);
        n_skipped += moved.n_skipped;
    }

    Ok(Layout {
        sketch: Sketch::new(name, curves),
        n_skipped,
    })
}

/// User facing summary of a nesting run
pub fn summary_message(label: &str, result: &NestingResult) -> String {
    if result.status == NestStatus::PartTooLarge {
        return "The selected sketch is too large to fit on the sheet with the current settings."
            .to_string();
    }
    let mut message = format!(
        "{label} nesting complete. {} parts placed in a single sketch.",
        result.n_placed()
    );
    if result.rotated {
        message.push_str(" Parts were rotated for optimal yield.");
    }
    match result.status {
        NestStatus::SheetExhausted => {
            message.push_str(" The sheet ran out of space before all parts were placed.")
        }
        NestStatus::OutOfBounds => {
            message.push_str(" Some parts extend past the edge clearance of the sheet.")
        }
        _ => {}
    }
    message
}
