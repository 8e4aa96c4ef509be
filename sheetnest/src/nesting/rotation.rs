use log::debug;

/// Grid orientation decision for a rectangular footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    /// Footprints are turned a quarter, `columns` and `rows` refer to the turned footprint
    pub rotate: bool,
    pub columns: i64,
    pub rows: i64,
}

impl Orientation {
    /// Number of grid cells, zero or negative when nothing fits.
    pub fn n_cells(&self) -> i64 {
        self.columns.saturating_mul(self.rows)
    }
}

/// Number of columns and rows of `part_w` by `part_h` cells that fit on the sheet.
///
/// Zero or negative counts mean the part does not fit along that axis.
pub fn grid_counts(
    part_w: f64,
    part_h: f64,
    sheet_w: f64,
    sheet_h: f64,
    clearance: f64,
    gutter: f64,
) -> (i64, i64) {
    //n parts need n gutters minus one
    let columns = ((sheet_w - 2.0 * clearance + gutter) / (part_w + gutter)).floor() as i64;
    let rows = ((sheet_h - 2.0 * clearance + gutter) / (part_h + gutter)).floor() as i64;
    (columns, rows)
}

/// Decides whether turning the part a quarter yields more grid cells on the sheet.
///
/// The turned orientation is only chosen when it is strictly better, ties keep the part as is.
/// This assumes a uniform grid, mixed orientations are not considered.
pub fn choose_orientation(
    part_w: f64,
    part_h: f64,
    sheet_w: f64,
    sheet_h: f64,
    clearance: f64,
    gutter: f64,
) -> Orientation {
    let (columns, rows) = grid_counts(part_w, part_h, sheet_w, sheet_h, clearance, gutter);
    let normal = Orientation {
        rotate: false,
        columns,
        rows,
    };

    let (columns, rows) = grid_counts(part_h, part_w, sheet_w, sheet_h, clearance, gutter);
    let rotated = Orientation {
        rotate: true,
        columns,
        rows,
    };

    debug!(
        "[ORIENT] normal: {}x{} ({}), rotated: {}x{} ({})",
        normal.columns,
        normal.rows,
        normal.n_cells(),
        rotated.columns,
        rotated.rows,
        rotated.n_cells()
    );

    match rotated.n_cells() > normal.n_cells() {
        true => rotated,
        false => normal,
    }
}
