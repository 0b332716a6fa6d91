use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::rings::number::Number;
use log::{debug, trace};
use num_traits::{One, Zero};

/// Fraction-free (Bareiss) elimination on a square matrix.
///
/// Each update divides by the previous pivot. Over integers that division is
/// exact; over floats it is the usual rounding approximation.
fn bareiss(matrix: &Matrix) -> Number {
    let n = matrix.rows_count();
    let mut work = matrix.to_list();
    let mut sign = Number::one();

    for k in 0..n - 1 {
        if work[k][k].is_zero() {
            match (k + 1..n).find(|&i| !work[i][k].is_zero()) {
                Some(i) => {
                    trace!("bareiss: swapping rows {} and {}", k, i);
                    work.swap(k, i);
                    sign = -sign;
                }
                // whole column is zero below the diagonal
                None => return Number::zero_of(matrix.element_kind()),
            }
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let mut value = work[k][k] * work[i][j] - work[i][k] * work[k][j];
                if k > 0 {
                    value = value / work[k - 1][k - 1];
                }
                work[i][j] = value;
            }
        }
    }

    sign * work[n - 1][n - 1]
}

impl Matrix {
    /// Determinant of a square matrix, computed once per instance.
    pub fn determinant(&self) -> Result<Number> {
        self.ensure_square()?;

        if let Some(det) = self.determinant.get() {
            debug!("determinant memo hit: {}", det);
            return Ok(*det);
        }

        Ok(*self.determinant.get_or_init(|| {
            let det = bareiss(self);
            debug!("determinant of {}x{} matrix: {}", self.rows_count(), self.columns_count(), det);
            det
        }))
    }

    /// True when the determinant is exactly zero.
    pub fn is_singular(&self) -> Result<bool> {
        Ok(self.determinant()?.is_zero())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
