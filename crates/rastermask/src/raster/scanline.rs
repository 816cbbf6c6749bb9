//! Edge-flag scan-line rasterizer for clockwise polygon rings.
//!
//! Purpose
//! - Convert an ordered ring of world-coordinate vertices into a binary mask
//!   at a given resolution, with optional zero-padding for a later inward
//!   buffer.
//!
//! Model
//! - Two pure passes composed by [`rasterize`]: `flag_edges` marks every cell
//!   where a non-horizontal edge crosses a scan line, `fill_rows` sweeps each
//!   row left to right under the even-odd rule.
//! - Grid size per axis is `round(extent / resolution) + 1 + 2*pad`, so a
//!   padded mask always has room for `pad` erosion steps.
//!
//! Two behaviors are deliberate simplifications, kept and tested as such:
//! - the buffer argument's sign is discarded;
//! - a row with fewer than two flagged cells is left unfilled (a polygon
//!   vertex sitting exactly on a scan line would otherwise smear into a
//!   spurious run; the cost is losing genuinely one-pixel-wide slivers).

use std::fmt;

use nalgebra::Vector2;

use super::buffer::apply_buffer;
use super::mask::Mask;
use crate::ring::close_ring;

/// Slack on the edge walk's termination, absorbing float drift when the
/// resolution does not evenly divide an edge's vertical extent.
pub const STEP_EPS: f64 = 1e-6;

/// Errors surfaced by the rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterizeError {
    /// Fewer than 3 distinct vertices, or a bounding box with no area.
    InvalidPolygon,
    /// Resolution must be finite and strictly positive.
    InvalidResolution { resolution: f64 },
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizeError::InvalidPolygon => {
                write!(f, "polygon is degenerate (needs ≥3 distinct vertices spanning an area)")
            }
            RasterizeError::InvalidResolution { resolution } => {
                write!(f, "resolution {} is not a positive finite number", resolution)
            }
        }
    }
}

/// Placement of the raster grid over the ring's bounding box.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridFrame {
    pub(crate) x_min: f64,
    pub(crate) y_max: f64,
    pub(crate) resolution: f64,
    pub(crate) pad: usize,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl GridFrame {
    pub(crate) fn from_ring(
        ring: &[Vector2<f64>],
        resolution: f64,
        pad: usize,
    ) -> Result<Self, RasterizeError> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in ring {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        // A line (or a single point) has no interior to rasterize.
        if !(x_max > x_min) || !(y_max > y_min) {
            return Err(RasterizeError::InvalidPolygon);
        }
        let rows = ((y_max - y_min) / resolution).round() as usize + 1 + 2 * pad;
        let cols = ((x_max - x_min) / resolution).round() as usize + 1 + 2 * pad;
        Ok(Self {
            x_min,
            y_max,
            resolution,
            pad,
            rows,
            cols,
        })
    }

    /// Row index of world y (row 0 = topmost scan line).
    #[inline]
    pub(crate) fn row(&self, y: f64) -> usize {
        ((y - self.y_max).abs() / self.resolution).round() as usize + self.pad
    }

    /// Column index of world x (column 0 = leftmost).
    #[inline]
    pub(crate) fn col(&self, x: f64) -> usize {
        ((x - self.x_min).abs() / self.resolution).round() as usize + self.pad
    }
}

/// Rasterize a clockwise polygon ring into a binary mask.
///
/// `buffer` pads the grid by that many cells per side and afterwards erodes
/// the filled mask inward by the same amount (see
/// [`apply_buffer`](super::buffer::apply_buffer)); its sign is discarded.
/// The ring is closed defensively if the last vertex does not repeat the
/// first.
pub fn rasterize(
    points: &[Vector2<f64>],
    resolution: f64,
    buffer: i64,
) -> Result<Mask, RasterizeError> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(RasterizeError::InvalidResolution { resolution });
    }
    if distinct_vertices(points) < 3 {
        return Err(RasterizeError::InvalidPolygon);
    }
    let pad = buffer.unsigned_abs() as usize;
    let ring = close_ring(points);
    let frame = GridFrame::from_ring(&ring, resolution, pad)?;
    let filled = fill_rows(flag_edges(&ring, &frame));
    if pad == 0 {
        Ok(filled)
    } else {
        Ok(apply_buffer(filled, pad))
    }
}

/// Contour pass: flag every cell where an edge crosses a scan line.
///
/// Horizontal edges contribute no crossings under the even-odd rule and are
/// skipped. For the rest, `y` walks from the lower endpoint to the upper one
/// in resolution steps; the matching `x` comes from the edge's slope (held
/// constant for vertical edges).
pub(crate) fn flag_edges(ring: &[Vector2<f64>], frame: &GridFrame) -> Mask {
    let mut mask = Mask::zeros(frame.rows, frame.cols);
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        let dy = b.y - a.y;
        if dy == 0.0 {
            continue;
        }
        let dx = b.x - a.x;
        let slope = if dx != 0.0 { Some(dy / dx) } else { None };
        let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
        let mut y = lo.y;
        while y <= hi.y + STEP_EPS {
            let x = match slope {
                Some(k) => (y - lo.y) / k + lo.x,
                None => lo.x,
            };
            let row = frame.row(y);
            let col = frame.col(x);
            // Drift at the frame boundary rounds outward; such cells carry
            // no crossing information.
            if row < frame.rows && col < frame.cols {
                mask.set(row, col, 1);
            }
            y += frame.resolution;
        }
    }
    mask
}

/// Fill pass: even-odd sweep per row, toggling on flagged cells.
pub(crate) fn fill_rows(mut mask: Mask) -> Mask {
    for r in 0..mask.rows() {
        let crossings = mask.row(r).iter().filter(|&&v| v != 0).count();
        if crossings < 2 {
            continue;
        }
        let mut inside = false;
        for c in 0..mask.cols() {
            if mask.get(r, c) != 0 {
                inside = !inside;
            }
            if inside {
                mask.set(r, c, 1);
            }
        }
    }
    mask
}

fn distinct_vertices(points: &[Vector2<f64>]) -> usize {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    pts.len()
}
