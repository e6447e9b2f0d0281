//! Shapes module - geometry of the mascot
//!
//! This module provides:
//! - `Point` value type and `Shape` trait for traceable outlines
//! - The blob body path builder (`build_blob_path`) and its cache
//! - `ClosedPath` drawing commands and their flattening into a `Polyline`
//! - Eye primitives: `Rectangle`, `RoundedRect` and their `EyeLayout`

mod blob;
mod eye;
mod path;
mod point;
mod polyline;
mod primitives;
mod traits;

#[allow(unused_imports)]
pub use blob::{
    build_blob_path, BlobError, BlobGeometry, BlobParams, BlobPathCache,
    DEFAULT_CONCAVITY, DEFAULT_CORNER_RADIUS_RATIO,
};
pub use eye::EyeLayout;
#[allow(unused_imports)]
pub use path::{quadratic_bezier, ClosedPath, PathCommand};
pub use point::Point;
#[allow(unused_imports)]
pub use polyline::Polyline;
#[allow(unused_imports)]
pub use primitives::{CornerRadii, Rectangle, RoundedRect};
pub use traits::{shape_to_points, Shape};
