use crate::error::{Axis, ConstructionError, Result};
use crate::matrix::matrix::Matrix;
use crate::rings::number::Number;
use crate::utils;
use num_traits::{One, Zero};

impl Matrix {
    /// Copy of the matrix without the 1-based `row` and `col`.
    ///
    /// Removing the only row or the only column would leave an empty matrix,
    /// which is a construction error.
    pub fn cross_out(&self, row: usize, col: usize) -> Result<Matrix> {
        let skip_row = utils::to_offset(Axis::Row, row, self.rows_count())?;
        let skip_col = utils::to_offset(Axis::Column, col, self.columns_count())?;

        if self.rows_count() == 1 || self.columns_count() == 1 {
            return Err(ConstructionError::Empty.into());
        }

        Ok(Matrix::from_trusted(
            (0..self.rows_count())
                .filter(|&r| r != skip_row)
                .map(|r| {
                    self.row_slice(r)
                        .iter()
                        .enumerate()
                        .filter(|(c, _)| *c != skip_col)
                        .map(|(_, cell)| *cell)
                        .collect()
                })
                .collect(),
        ))
    }

    /// Rows become columns. A single-row matrix turns directly into a column.
    ///
    /// The result is built through the trusted constructor, which re-checks
    /// the invariants only in debug builds: a transposed valid matrix is
    /// always rectangular, non-empty and single-kind, so the signature stays
    /// infallible.
    pub fn transpose(&self) -> Matrix {
        if self.rows_count() == 1 {
            return Matrix::from_trusted(self.row_slice(0).iter().map(|cell| vec![*cell]).collect());
        }

        Matrix::from_trusted(
            (0..self.columns_count())
                .map(|c| (0..self.rows_count()).map(|r| self.at(r, c)).collect())
                .collect(),
        )
    }

    /// Same shape as `self`, `1` where `i == j` and `0` elsewhere, even when
    /// the matrix is not square.
    pub fn identity(&self) -> Matrix {
        Matrix::from_trusted(
            (0..self.rows_count())
                .map(|i| {
                    (0..self.columns_count())
                        .map(|j| if i == j { Number::one() } else { Number::zero() })
                        .collect()
                })
                .collect(),
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
