mod export;
mod import;

/// External (serializable) representations of sketches and nesting results.
pub mod ext_repr;

#[doc(inline)]
pub use export::{export_curve, export_result, export_sketch};
#[doc(inline)]
pub use import::{ImportedSketch, import_curve, import_sketch};
