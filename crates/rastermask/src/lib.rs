//! Polygon rasterization and affine georeferencing primitives.
//!
//! Purpose
//! - Turn a clockwise vector polygon (an ordered ring of 2D points) into a
//!   binary occupancy mask via scan-line edge flagging and even-odd fill.
//! - Relate pixel indices of such a mask to world/map coordinates through a
//!   6-parameter affine geotransform with rotation support.
//!
//! Everything here operates on plain Cartesian coordinates. Reprojection,
//! spatial references, and geometry-library object models stay on the caller's
//! side of the boundary; vertex lists cross it as `Vector2<f64>` slices.

pub mod geotransform;
pub mod raster;
pub mod ring;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geotransform::{AngleUnit, GeoTransform, PixelAnchor, TransformCfg, TransformError};
pub use raster::{apply_buffer, rasterize, Mask, RasterizeError};

// Convenience alias so callers and the library spell 2D points the same way.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geotransform::{
        AngleUnit, GeoTransform, PixelAnchor, TransformCfg, TransformError,
    };
    pub use crate::raster::{apply_buffer, rasterize, Mask, RasterizeError};
    pub use crate::ring::{close_ring, polar_point, quadrant, ring_from_bbox, segmentize, Quadrant};
    pub use nalgebra::Vector2 as Vec2;
}
