mod nesting_result;
mod part;
mod placement;
mod sheet;
mod sketch;

#[doc(inline)]
pub use nesting_result::{NestStatus, NestingResult};
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use sheet::SheetSpec;
#[doc(inline)]
pub use sketch::Sketch;
