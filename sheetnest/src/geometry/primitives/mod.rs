mod curve;
mod point;
mod rect;

#[doc(inline)]
pub use curve::Curve;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
