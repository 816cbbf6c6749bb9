//! Row-major binary occupancy grid.

/// Binary raster mask: 0 = background, 1 = foreground.
///
/// Invariants:
/// - Row-major storage, `data.len() == rows * cols`.
/// - Row 0 is the topmost scan line (maximum y), column 0 the leftmost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mask {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Mask {
    /// All-background mask of the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.data[row * self.cols + col] = value;
    }

    /// One scan line, leftmost column first.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Full row-major contents.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of foreground cells.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Drop `margin` rows and columns from every side.
    ///
    /// Saturates to an empty (0×0) mask when the margin consumes the grid.
    pub fn crop(&self, margin: usize) -> Mask {
        if margin == 0 {
            return self.clone();
        }
        if 2 * margin >= self.rows || 2 * margin >= self.cols {
            return Mask::zeros(0, 0);
        }
        let rows = self.rows - 2 * margin;
        let cols = self.cols - 2 * margin;
        let mut out = Mask::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                out.set(r, c, self.get(r + margin, c + margin));
            }
        }
        out
    }
}
