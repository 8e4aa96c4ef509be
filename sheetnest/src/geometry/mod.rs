mod bounds;
mod placement_transform;
mod transformation;

pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use bounds::{MIN_SPAN, compute_bounds};
#[doc(inline)]
pub use placement_transform::{TransformedCurves, apply_transform, placement_transformation};
#[doc(inline)]
pub use transformation::Transformation;
