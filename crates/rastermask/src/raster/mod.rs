//! Binary raster masks from clockwise polygon rings.
//!
//! Purpose
//! - Provide the edge-flag scan-line rasterizer (`rasterize`), the row-major
//!   byte mask it produces (`Mask`), and the erosion-based inward buffer
//!   applied to padded masks (`apply_buffer`).
//!
//! The rasterizer works in the polygon's own coordinate space; georeferencing
//! a finished mask is the [`geotransform`](crate::geotransform) module's job.

pub mod buffer;
pub mod mask;
pub mod scanline;

pub use buffer::apply_buffer;
pub use mask::Mask;
pub use scanline::{rasterize, RasterizeError};

#[cfg(test)]
mod tests;
