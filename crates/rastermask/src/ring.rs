//! Vertex-list helpers for polygon rings.
//!
//! Purpose
//! - Keep the rasterizer's input contract ("a closed, sufficiently dense,
//!   clockwise ring of plain 2D points") producible without any vector
//!   geometry library: closing, densifying, and building rings from bounding
//!   boxes all happen on `Vector2<f64>` slices.

use nalgebra::Vector2;

/// Vertices closer than this are treated as coincident when closing a ring.
pub const CLOSE_EPS: f64 = 1e-12;

/// Ensure the ring's last vertex repeats its first.
///
/// Already-closed rings are returned unchanged (modulo the copy).
pub fn close_ring(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut ring = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if (first - last).norm() > CLOSE_EPS {
            ring.push(first);
        }
    }
    ring
}

/// Densify a ring so that no segment is longer than `max_segment`.
///
/// Intermediate vertices are spaced evenly along each segment; original
/// vertices are preserved exactly. Returns `None` for a non-positive or
/// non-finite spacing.
pub fn segmentize(ring: &[Vector2<f64>], max_segment: f64) -> Option<Vec<Vector2<f64>>> {
    if !max_segment.is_finite() || max_segment <= 0.0 {
        return None;
    }
    let mut out = Vec::with_capacity(ring.len());
    match ring.first() {
        Some(&p) => out.push(p),
        None => return Some(out),
    }
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        let pieces = ((b - a).norm() / max_segment).ceil().max(1.0) as usize;
        for k in 1..pieces {
            let t = k as f64 / pieces as f64;
            out.push(a + (b - a) * t);
        }
        out.push(b);
    }
    Some(out)
}

/// Closed clockwise ring spanning a bounding box given by its lower-left and
/// upper-right corners.
///
/// Corners given across the antimeridian (left x greater than right x) unwrap
/// the right edge by +360 so the ring still spans the intended area.
pub fn ring_from_bbox(lower_left: Vector2<f64>, upper_right: Vector2<f64>) -> Vec<Vector2<f64>> {
    let ll = lower_left;
    let mut ur = upper_right;
    if ll.x > ur.x {
        ur.x += 360.0;
    }
    vec![
        ll,
        Vector2::new(ll.x, ur.y),
        ur,
        Vector2::new(ur.x, ll.y),
        ll,
    ]
}

/// Point at `distance` from `origin` along `azimuth` (radians, from the
/// x-axis). Coordinates are snapped to 1e-13 to stabilize trigonometric
/// residue near the axes.
pub fn polar_point(origin: Vector2<f64>, distance: f64, azimuth: f64) -> Vector2<f64> {
    const SNAP: f64 = 1e13;
    Vector2::new(
        ((origin.x + distance * azimuth.cos()) * SNAP).round() / SNAP,
        ((origin.y + distance * azimuth.sin()) * SNAP).round() / SNAP,
    )
}

/// Mathematical quadrant, counterclockwise from positive x/y.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

/// Quadrant of a point; `None` when either coordinate sits on an axis.
pub fn quadrant(p: Vector2<f64>) -> Option<Quadrant> {
    if p.x > 0.0 && p.y > 0.0 {
        Some(Quadrant::First)
    } else if p.x < 0.0 && p.y > 0.0 {
        Some(Quadrant::Second)
    } else if p.x < 0.0 && p.y < 0.0 {
        Some(Quadrant::Third)
    } else if p.x > 0.0 && p.y < 0.0 {
        Some(Quadrant::Fourth)
    } else {
        None
    }
}
