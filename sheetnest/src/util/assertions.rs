use itertools::Itertools;

use crate::entities::SheetSpec;
use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// No two rectangles share interior area (touching borders are allowed).
pub fn no_overlap(occupied: &[Rect]) -> bool {
    occupied.iter().tuple_combinations().all(|(a, b)| {
        let x_overlap = FPA(f64::max(a.x_min, b.x_min)) < FPA(f64::min(a.x_max, b.x_max));
        let y_overlap = FPA(f64::max(a.y_min, b.y_min)) < FPA(f64::min(a.y_max, b.y_max));
        !(x_overlap && y_overlap)
    })
}

/// Every rectangle lies within the clearance lines left and right on the sheet.
pub fn within_sheet_width(occupied: &[Rect], sheet: &SheetSpec) -> bool {
    let region = sheet.usable_region();
    occupied
        .iter()
        .all(|r| FPA(r.x_min) >= FPA(region.x_min) && FPA(r.x_max) <= FPA(region.x_max))
}

/// Every rectangle lies within the clearance lines on all sides of the sheet.
pub fn within_usable_region(occupied: &[Rect], sheet: &SheetSpec) -> bool {
    let region = sheet.usable_region();
    within_sheet_width(occupied, sheet)
        && occupied
            .iter()
            .all(|r| FPA(r.y_min) >= FPA(region.y_min) && FPA(r.y_max) <= FPA(region.y_max))
}
