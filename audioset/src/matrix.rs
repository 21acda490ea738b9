//! Owned dense matrices for waveforms and labels

use audioset_core::{validate_matrix_len, AudioSetError, DenseMatrix};
use std::ops::Index;

use crate::Result;

/// Dense row-major matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

/// Decoded waveforms: one row of normalized amplitudes per clip
pub type Waveform = Matrix<f32>;

/// Decoded labels: one row of 0/1 flags per clip
pub type Labels = Matrix<i32>;

impl<T: Copy> Matrix<T> {
    /// Wrap a flat row-major buffer
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self> {
        validate_matrix_len(data.len(), nrows, ncols)?;
        Ok(Self { nrows, ncols, data })
    }

    /// Build from equally sized rows
    ///
    /// An empty slice yields a 0 x 0 matrix; use [`Matrix::from_vec`] for
    /// an empty matrix with a known column count.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * ncols);

        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(AudioSetError::ShapeMismatch.into());
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            nrows: rows.len(),
            ncols,
            data,
        })
    }

    /// Matrix with every element set to `value`
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![value; nrows * ncols],
        }
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |r| &self.data[r * self.ncols..(r + 1) * self.ncols])
    }

    /// Mutable access to one row
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.nrows {
            return None;
        }
        let ncols = self.ncols;
        self.data.get_mut(row * ncols..(row + 1) * ncols)
    }

    /// Consume the matrix, returning the flat row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> DenseMatrix for Matrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();

        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
        assert_eq!(m.row(2), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Matrix::from_rows(&rows),
            Err(Error::Format(AudioSetError::ShapeMismatch))
        ));
    }

    #[test]
    fn test_from_vec_checks_len() {
        assert!(Matrix::from_vec(2, 2, vec![0.0f32; 4]).is_ok());
        assert!(Matrix::from_vec(2, 2, vec![0.0f32; 5]).is_err());
    }

    #[test]
    fn test_zero_width_rows() {
        let m: Matrix<f32> = Matrix::from_vec(3, 0, vec![]).unwrap();
        assert_eq!(m.rows().count(), 3);
        assert!(m.rows().all(|r| r.is_empty()));
    }

    #[test]
    fn test_row_mut() {
        let mut m = Matrix::filled(2, 2, 0i32);
        m.row_mut(1).unwrap()[0] = 7;
        assert_eq!(m.into_vec(), vec![0, 0, 7, 0]);
    }
}
