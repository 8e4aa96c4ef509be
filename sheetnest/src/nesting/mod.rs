mod grid;
mod rotation;
mod shelf;

use serde::{Deserialize, Serialize};

#[doc(inline)]
pub use grid::{SQUARE_TOLERANCE, nest_grid};
#[doc(inline)]
pub use rotation::{Orientation, choose_orientation, grid_counts};
#[doc(inline)]
pub use shelf::pack_shelves;

/// Flavour of grid nesting
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    /// Plain rows and columns, parts are never turned
    #[default]
    Simple,
    /// Parts are turned when that fits more copies, odd rows are staggered by half a gutter
    Advanced,
}
