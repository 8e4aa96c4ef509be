use crate::entities::Placement;

/// Outcome of a nesting run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestStatus {
    /// Every requested copy was placed
    Complete,
    /// Some requested copies did not fit on the sheet
    Partial,
    /// Shelf packing ran out of sheet height and stopped
    SheetExhausted,
    /// No copy could be placed at all
    PartTooLarge,
    /// Shelf packing placed copies crossing the clearance lines (a part wider than the sheet, or
    /// taller than the height left above its shelf). Utilization may then exceed 100%.
    OutOfBounds,
}

/// A finished layout. Produced once per run and handed over to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct NestingResult {
    pub placements: Vec<Placement>,
    /// Whether a quarter turn was applied (grid: to all copies, shelf: to at least one copy)
    pub rotated: bool,
    /// Grid: rows of the grid. Shelf: number of shelves used.
    pub rows: usize,
    /// Grid: columns of the grid. Shelf: most copies on a single shelf.
    pub columns: usize,
    pub utilization_percent: f64,
    pub unused_area: f64,
    pub status: NestStatus,
}

impl NestingResult {
    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    /// Number of copies placed of the part with id `part_id`
    pub fn n_placed_of(&self, part_id: &str) -> usize {
        self.placements
            .iter()
            .filter(|p| p.part_id == part_id)
            .count()
    }
}
