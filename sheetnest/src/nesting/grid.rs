use anyhow::Result;
use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{NestStatus, NestingResult, Part, Placement, SheetSpec};
use crate::geometry::primitives::Rect;
use crate::nesting::NestingMode;
use crate::nesting::rotation::{choose_orientation, grid_counts};
use crate::util::assertions;

/// Footprints whose width and height differ by no more than this are treated as square and never turned.
pub const SQUARE_TOLERANCE: f64 = 0.01;

/// Lays out copies of a single part on the sheet in rows and columns.
///
/// The footprint is the part's bounding box enlarged by the sheet's kerf compensation.
/// In [`NestingMode::Advanced`] a quarter turn is applied to every copy if that fits more of them,
/// and odd rows are shifted right by half a gutter.
/// Row and column counts are clamped to at least one, so a single placement is always attempted.
///
/// Copies are emitted row by row, bottom to top, left to right within a row, up to `part.quantity`.
/// A copy that would cross the right-hand clearance line is skipped. The top clearance line is not checked
/// per copy: the row count already accounts for the sheet height.
pub fn nest_grid(part: &Part, sheet: &SheetSpec, mode: NestingMode) -> Result<NestingResult> {
    sheet.validate()?;

    let SheetSpec {
        width: sheet_w,
        height: sheet_h,
        edge_clearance: clearance,
        gutter,
        ..
    } = *sheet;

    let (mut part_w, mut part_h) = part.footprint(sheet);

    let is_square = (part_w - part_h).abs() <= SQUARE_TOLERANCE;
    let (rotate, columns, rows) = match mode {
        NestingMode::Advanced if !is_square => {
            let o = choose_orientation(part_w, part_h, sheet_w, sheet_h, clearance, gutter);
            (o.rotate, o.columns, o.rows)
        }
        _ => {
            let (columns, rows) = grid_counts(part_w, part_h, sheet_w, sheet_h, clearance, gutter);
            (false, columns, rows)
        }
    };

    if rotate {
        std::mem::swap(&mut part_w, &mut part_h);
    }

    let columns = columns.max(1) as usize;
    let rows = rows.max(1) as usize;
    let to_place = part.quantity.min(columns.saturating_mul(rows));

    debug!(
        "[GRID] part {}: footprint {:.3}x{:.3}, rotated: {}, grid {}x{}, placing {}",
        part.id, part_w, part_h, rotate, columns, rows, to_place
    );

    let mut placements = vec![];

    'rows: for row in 0..rows {
        let row_offset = match (mode, row % 2) {
            (NestingMode::Advanced, 1) => gutter / 2.0,
            _ => 0.0,
        };
        for col in 0..columns {
            if placements.len() >= to_place {
                break 'rows;
            }
            let x = clearance + row_offset + col as f64 * (part_w + gutter);
            let y = clearance + row as f64 * (part_h + gutter);

            if x + part_w > sheet_w - clearance {
                continue;
            }
            placements.push(Placement::new(part.id.clone(), x, y, rotate));
        }
    }

    debug_assert!({
        //the footprint is already turned, occupied space is taken as is
        let occupied = placements
            .iter()
            .map(|p| Rect {
                x_min: p.x,
                y_min: p.y,
                x_max: p.x + part_w,
                y_max: p.y + part_h,
            })
            .collect_vec();
        assertions::within_sheet_width(&occupied, sheet) && assertions::no_overlap(&occupied)
    });

    let used_area = placements.len() as f64 * part_w * part_h;

    let status = match placements.len() {
        0 => {
            warn!(
                "[GRID] part {} ({:.3}x{:.3}) does not fit on the {}x{} sheet",
                part.id, part_w, part_h, sheet_w, sheet_h
            );
            NestStatus::PartTooLarge
        }
        n if n < part.quantity => NestStatus::Partial,
        _ => NestStatus::Complete,
    };

    Ok(NestingResult {
        placements,
        rotated: rotate,
        rows,
        columns,
        utilization_percent: 100.0 * used_area / sheet.area(),
        unused_area: sheet.area() - used_area,
        status,
    })
}
