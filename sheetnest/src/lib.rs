//! Nesting of flat parts on a rectangular stock sheet.
//!
//! Given a sheet and one or more part outlines (as curve sets), `sheetnest` computes how many copies fit,
//! whether a quarter turn improves yield and where every copy goes. Turning the resulting [`Placement`](entities::Placement)s
//! back into geometry is done with the placement transform in [`geometry`].

/// Geometric primitives, bounds extraction and transformations
pub mod geometry;

/// Entities to model sheets, parts and nesting results
pub mod entities;

/// Grid nesting, orientation selection and shelf packing
pub mod nesting;

/// Importing sketches into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
