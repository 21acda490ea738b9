//! Dense row-major matrix abstraction
//!
//! Waveforms and labels are both dense `rows x cols` matrices. Encoding
//! only needs row-major read access, so any storage that can expose a flat
//! slice can be written directly.

/// Read access to a dense, row-major matrix
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: Copy;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// All elements in row-major order
    ///
    /// The slice length must equal `rows * cols`.
    fn as_slice(&self) -> &[Self::Element];

    /// Number of rows
    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    /// Number of columns
    fn ncols(&self) -> usize {
        self.dimensions().1
    }

    /// Borrow one row, or `None` when out of bounds
    fn row(&self, row: usize) -> Option<&[Self::Element]> {
        let (nrows, ncols) = self.dimensions();
        if row >= nrows {
            return None;
        }
        self.as_slice().get(row * ncols..(row + 1) * ncols)
    }

    /// Get one element, or `None` when out of bounds
    fn get(&self, row: usize, col: usize) -> Option<Self::Element> {
        if col >= self.ncols() {
            return None;
        }
        self.row(row).map(|r| r[col])
    }
}
