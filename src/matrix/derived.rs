use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::rings::number::Number;
use crate::utils::checkerboard_sign;
use num_traits::Zero;
use rayon::prelude::*;

impl Matrix {
    /// Matrix of minors: cell `(i, j)` is the determinant of the matrix with
    /// row `i` and column `j` crossed out. A 1x1 matrix is its own minors matrix.
    pub fn minors(&self) -> Result<Matrix> {
        self.ensure_square()?;
        let n = self.rows_count();
        if n == 1 {
            return Ok(self.clone());
        }

        let cells = (0..n * n)
            .into_par_iter()
            .map(|idx| self.cross_out(idx / n + 1, idx % n + 1)?.determinant())
            .collect::<Result<Vec<Number>>>()?;

        Ok(Matrix::from_computed(
            cells.chunks(n).map(|line| line.to_vec()).collect(),
        ))
    }

    /// Minors with the `(-1)^(i+j)` sign pattern applied.
    pub fn cofactors(&self) -> Result<Matrix> {
        let minors = self.minors()?;

        Ok(Matrix::from_computed(
            (0..minors.rows_count())
                .map(|i| {
                    minors
                        .row_slice(i)
                        .iter()
                        .enumerate()
                        .map(|(j, minor)| *minor * checkerboard_sign(i, j))
                        .collect()
                })
                .collect(),
        ))
    }

    /// Adjugate: transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Matrix> {
        Ok(self.cofactors()?.transpose())
    }

    pub fn inverse(&self) -> Result<Matrix> {
        self.ensure_square()?;
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(MatrixError::Singular);
        }

        if self.rows_count() == 1 {
            return Ok(Matrix::from_computed(vec![vec![self.at(0, 0).recip()]]));
        }

        self.adjoint()?.multiply_scalar(det.recip())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
