//! Inward mask buffering via iterated binary erosion.
//!
//! Erosion with a 3×3 full kernel repeated `buffer` times shrinks the
//! foreground by `buffer` cells on every side (equivalent to a single pass
//! with a `(2*buffer+1)²` full kernel), then the padding border added by the
//! rasterizer is cropped away. This approximates an inward polygon buffer on
//! the grid; it is resolution-dependent and rounds corners.

use super::mask::Mask;

/// Erode `mask` inward by `buffer` cells and crop the padding border.
///
/// Identity for `buffer == 0`.
pub fn apply_buffer(mask: Mask, buffer: usize) -> Mask {
    if buffer == 0 {
        return mask;
    }
    let mut eroded = mask;
    for _ in 0..buffer {
        eroded = erode(&eroded);
    }
    eroded.crop(buffer)
}

/// One binary erosion step: a cell survives only if its full 3×3
/// neighborhood is foreground. Cells beyond the grid count as background.
fn erode(mask: &Mask) -> Mask {
    let (rows, cols) = (mask.rows(), mask.cols());
    let mut out = Mask::zeros(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            if mask.get(r, c) == 0 {
                continue;
            }
            if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                continue;
            }
            let mut keep = true;
            'kernel: for nr in r - 1..=r + 1 {
                for nc in c - 1..=c + 1 {
                    if mask.get(nr, nc) == 0 {
                        keep = false;
                        break 'kernel;
                    }
                }
            }
            if keep {
                out.set(r, c, 1);
            }
        }
    }
    out
}
