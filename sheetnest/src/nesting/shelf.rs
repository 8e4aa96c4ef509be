use std::cmp::Reverse;

use anyhow::Result;
use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::entities::{NestStatus, NestingResult, Part, Placement, SheetSpec};
use crate::util::assertions;

/// Packs a heterogeneous list of parts on the sheet with a next-fit decreasing-height shelf heuristic.
///
/// Parts are sorted by decreasing footprint area (ties keep their input order) and every requested copy
/// is placed left to right on the current shelf. A copy that does not fit the remaining shelf width is tried
/// turned a quarter; if that does not fit either, a new shelf is opened above the tallest copy of the current one.
/// Packing stops as soon as a copy does not fit the height left above a freshly opened shelf,
/// later copies and parts are not attempted.
///
/// A copy opening a new shelf is placed even if it is wider than the sheet. Layouts with copies crossing
/// the clearance lines are reported as [`NestStatus::OutOfBounds`], which takes precedence over
/// [`NestStatus::SheetExhausted`].
///
/// Placements are never reconsidered, the result is a heuristic and not optimal.
pub fn pack_shelves(sheet: &SheetSpec, parts: &[Part]) -> Result<NestingResult> {
    sheet.validate()?;

    let SheetSpec {
        width: sheet_w,
        height: sheet_h,
        edge_clearance: clearance,
        gutter,
        ..
    } = *sheet;

    let sorted_parts = parts
        .iter()
        .map(|part| (part, part.footprint(sheet)))
        .sorted_by_key(|(_, (w, h))| Reverse(OrderedFloat(w * h)))
        .collect_vec();

    let (mut x, mut y) = (clearance, clearance);
    let mut max_height_in_row: f64 = 0.0;

    let mut placements = vec![];
    let mut occupied = vec![];
    let mut copies_per_shelf = vec![0usize];
    let mut used_area = 0.0;
    let mut exhausted = false;

    'packing: for (part, (part_w, part_h)) in sorted_parts {
        for _ in 0..part.quantity {
            let rotated = if x + part_w <= sheet_w - clearance {
                false
            } else if x + part_h <= sheet_w - clearance && y + part_w <= sheet_h - clearance {
                true
            } else {
                //open a new shelf
                x = clearance;
                y += max_height_in_row + gutter;
                max_height_in_row = 0.0;
                if y + part_h > sheet_h - clearance {
                    warn!(
                        "[SHELF] sheet exhausted at y = {y:.3}, {} copies placed",
                        placements.len()
                    );
                    exhausted = true;
                    break 'packing;
                }
                debug!("[SHELF] new shelf at y = {y:.3}");
                copies_per_shelf.push(0);
                false
            };

            let (w, h) = match rotated {
                false => (part_w, part_h),
                true => (part_h, part_w),
            };
            let placement = Placement::new(part.id.clone(), x, y, rotated);
            occupied.push(placement.occupied((part_w, part_h)));
            placements.push(placement);
            x += w + gutter;
            max_height_in_row = max_height_in_row.max(h);
            used_area += part_w * part_h;
            if let Some(n) = copies_per_shelf.last_mut() {
                *n += 1;
            }
        }
    }

    debug_assert!(assertions::no_overlap(&occupied));

    //copies opening a shelf are placed without checking their width
    let out_of_bounds = !assertions::within_usable_region(&occupied, sheet);
    if out_of_bounds {
        warn!("[SHELF] some copies cross the clearance lines of the sheet");
    }

    let sheet_area = sheet.area();
    let status = match (out_of_bounds, exhausted) {
        (true, _) => NestStatus::OutOfBounds,
        (false, true) => NestStatus::SheetExhausted,
        (false, false) => NestStatus::Complete,
    };

    Ok(NestingResult {
        rotated: placements.iter().any(|p| p.rotated),
        rows: copies_per_shelf.iter().filter(|n| **n > 0).count(),
        columns: copies_per_shelf.iter().copied().max().unwrap_or(0),
        placements,
        utilization_percent: 100.0 * used_area / sheet_area,
        unused_area: sheet_area - used_area,
        status,
    })
}
