use nalgebra::{vector, Vector2};
use proptest::prelude::*;

use super::mask::Mask;
use super::scanline::{fill_rows, flag_edges, rasterize, GridFrame, RasterizeError};

fn ring(points: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    points.iter().map(|&(x, y)| vector![x, y]).collect()
}

#[test]
fn unit_resolution_square_is_fully_interior() {
    // A 2×2-unit square sampled at unit resolution: 3×3 grid, all foreground.
    let m = rasterize(
        &ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]),
        1.0,
        0,
    )
    .unwrap();
    assert_eq!((m.rows(), m.cols()), (3, 3));
    assert_eq!(m.count_ones(), 9);
}

#[test]
fn rectangle_dimensions_follow_extent() {
    // Width 5, height 3 → 6 columns, 4 rows, fully covered.
    let m = rasterize(
        &ring(&[(1.0, 1.0), (1.0, 4.0), (6.0, 4.0), (6.0, 1.0), (1.0, 1.0)]),
        1.0,
        0,
    )
    .unwrap();
    assert_eq!((m.rows(), m.cols()), (4, 6));
    assert_eq!(m.count_ones(), 24);
}

#[test]
fn right_triangle_rows_widen_away_from_apex() {
    let m = rasterize(
        &ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (0.0, 0.0)]),
        1.0,
        0,
    )
    .unwrap();
    assert_eq!((m.rows(), m.cols()), (5, 5));
    let widths: Vec<usize> = (0..m.rows())
        .map(|r| m.row(r).iter().filter(|&&v| v != 0).count())
        .collect();
    // Row 0 holds the apex; each row toward the base is at least as wide.
    assert!(widths.windows(2).all(|w| w[0] <= w[1]), "widths {widths:?}");
    assert_eq!(widths, vec![1, 2, 3, 4, 5]);
}

#[test]
fn apex_row_with_single_crossing_stays_one_pixel() {
    // Diamond: both edges meeting at the top vertex flag the same cell.
    let m = rasterize(
        &ring(&[(2.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 2.0), (2.0, 0.0)]),
        1.0,
        0,
    )
    .unwrap();
    assert_eq!(m.row(0).iter().filter(|&&v| v != 0).count(), 1);
    assert_eq!(m.row(4).iter().filter(|&&v| v != 0).count(), 1);
    // The middle row crosses at both extremes and fills across.
    assert_eq!(m.row(2).iter().filter(|&&v| v != 0).count(), 5);
}

#[test]
fn open_ring_is_closed_defensively() {
    let closed = rasterize(
        &ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]),
        1.0,
        0,
    )
    .unwrap();
    let open = rasterize(
        &ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]),
        1.0,
        0,
    )
    .unwrap();
    assert_eq!(open, closed);
}

#[test]
fn buffer_sign_is_discarded() {
    let pts = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let pos = rasterize(&pts, 1.0, 1).unwrap();
    let neg = rasterize(&pts, 1.0, -1).unwrap();
    assert_eq!(pos, neg);
}

#[test]
fn buffered_square_keeps_a_centered_core() {
    // 4×4-unit square, buffer 1: grid padded to 7×7, eroded once, cropped to
    // 5×5 with a 3×3 foreground core.
    let m = rasterize(
        &ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
        1.0,
        1,
    )
    .unwrap();
    assert_eq!((m.rows(), m.cols()), (5, 5));
    assert_eq!(m.count_ones(), 9);
    for r in 1..4 {
        for c in 1..4 {
            assert_eq!(m.get(r, c), 1);
        }
    }
    assert_eq!(m.get(0, 0), 0);
    assert_eq!(m.get(4, 4), 0);
}

#[test]
fn finer_resolution_grows_the_grid() {
    let m = rasterize(
        &ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]),
        0.5,
        0,
    )
    .unwrap();
    assert_eq!((m.rows(), m.cols()), (5, 5));
    assert_eq!(m.count_ones(), 25);
}

#[test]
fn degenerate_inputs_are_rejected() {
    // Too few distinct vertices.
    assert_eq!(
        rasterize(&ring(&[(0.0, 0.0), (1.0, 1.0)]), 1.0, 0),
        Err(RasterizeError::InvalidPolygon)
    );
    // Duplicates collapse below three distinct vertices.
    assert_eq!(
        rasterize(&ring(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]), 1.0, 0),
        Err(RasterizeError::InvalidPolygon)
    );
    // Collinear on a horizontal line: bounding box has no height.
    assert_eq!(
        rasterize(&ring(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]), 1.0, 0),
        Err(RasterizeError::InvalidPolygon)
    );
    // Collinear on a vertical line: bounding box has no width.
    assert_eq!(
        rasterize(&ring(&[(1.0, 0.0), (1.0, 2.0), (1.0, 4.0)]), 1.0, 0),
        Err(RasterizeError::InvalidPolygon)
    );
}

#[test]
fn non_positive_resolution_is_rejected() {
    let pts = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            rasterize(&pts, bad, 0),
            Err(RasterizeError::InvalidResolution { .. })
        ));
    }
}

#[test]
fn passes_compose_to_the_public_result() {
    let pts = ring(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0), (0.0, 0.0)]);
    let frame = GridFrame::from_ring(&pts, 1.0, 0).unwrap();
    let staged = fill_rows(flag_edges(&pts, &frame));
    assert_eq!(staged, rasterize(&pts, 1.0, 0).unwrap());
}

#[test]
fn fill_skips_rows_with_fewer_than_two_crossings() {
    let mut flagged = Mask::zeros(2, 5);
    flagged.set(0, 2, 1);
    flagged.set(1, 1, 1);
    flagged.set(1, 3, 1);
    let filled = fill_rows(flagged);
    assert_eq!(filled.row(0), &[0, 0, 1, 0, 0]);
    assert_eq!(filled.row(1), &[0, 1, 1, 1, 0]);
}

proptest! {
    #[test]
    fn integer_rectangles_fill_completely(
        x0 in -20i32..20,
        y0 in -20i32..20,
        w in 1u32..12,
        h in 1u32..12,
    ) {
        let (x0, y0) = (f64::from(x0), f64::from(y0));
        let (x1, y1) = (x0 + f64::from(w), y0 + f64::from(h));
        let pts = ring(&[(x0, y0), (x0, y1), (x1, y1), (x1, y0), (x0, y0)]);
        let m = rasterize(&pts, 1.0, 0).unwrap();
        prop_assert_eq!((m.rows(), m.cols()), (h as usize + 1, w as usize + 1));
        prop_assert_eq!(m.count_ones(), (h as usize + 1) * (w as usize + 1));
    }

    #[test]
    fn buffer_magnitude_decides_the_result(
        b in 0i64..3,
    ) {
        let pts = ring(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0), (0.0, 0.0)]);
        let pos = rasterize(&pts, 1.0, b).unwrap();
        let neg = rasterize(&pts, 1.0, -b).unwrap();
        prop_assert_eq!(pos, neg);
    }
}
