use crate::error::{MatrixError, Result};
use crate::matrix::matrix::Matrix;
use crate::rings::number::Number;
use num_traits::Zero;
use std::ops;

/// Direction of an elementwise matrix sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

fn numeric(value: Number) -> Result<Number> {
    if !value.is_numeric() {
        return Err(MatrixError::InvalidScalar(format!("{} is not a number", value)));
    }
    Ok(value)
}

impl Matrix {
    fn map_cells(&self, f: impl Fn(Number) -> Number) -> Matrix {
        Matrix::from_computed(
            (0..self.rows_count())
                .map(|r| self.row_slice(r).iter().map(|cell| f(*cell)).collect())
                .collect(),
        )
    }

    fn mismatch(&self, operation: &'static str, rhs: &Matrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            operation,
            left: self.shape(),
            right: rhs.shape(),
        }
    }

    pub fn multiply_scalar(&self, value: impl Into<Number>) -> Result<Matrix> {
        let value = numeric(value.into())?;
        Ok(self.map_cells(|cell| cell * value))
    }

    /// Multiplies by the reciprocal of `value`.
    pub fn divide_scalar(&self, value: impl Into<Number>) -> Result<Matrix> {
        let value = numeric(value.into())?;
        if value.is_zero() {
            return Err(MatrixError::InvalidScalar("division by zero".into()));
        }
        self.multiply_scalar(value.recip())
    }

    pub fn sum_scalar(&self, value: impl Into<Number>) -> Result<Matrix> {
        let value = numeric(value.into())?;
        Ok(self.map_cells(|cell| cell + value))
    }

    pub fn subtract_scalar(&self, value: impl Into<Number>) -> Result<Matrix> {
        let value = numeric(value.into())?;
        Ok(self.map_cells(|cell| cell - value))
    }

    /// Elementwise `self + rhs` or `self - rhs`; shapes must match.
    pub fn sum_with_sign(&self, rhs: &Matrix, sign: Sign) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            let operation = match sign {
                Sign::Plus => "sum",
                Sign::Minus => "subtract",
            };
            return Err(self.mismatch(operation, rhs));
        }

        let cells = self.cells().iter().zip(rhs.cells().iter()).map(|(a, b)| match sign {
            Sign::Plus => *a + *b,
            Sign::Minus => *a - *b,
        });
        let values: Vec<Number> = cells.collect();

        Ok(Matrix::from_computed(
            values
                .chunks(self.columns_count())
                .map(|line| line.to_vec())
                .collect(),
        ))
    }

    pub fn sum(&self, rhs: &Matrix) -> Result<Matrix> {
        self.sum_with_sign(rhs, Sign::Plus)
    }

    pub fn subtract(&self, rhs: &Matrix) -> Result<Matrix> {
        self.sum_with_sign(rhs, Sign::Minus)
    }

    /// Matrix product; `self.columns_count()` must equal `rhs.rows_count()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.columns_count() != rhs.rows_count() {
            return Err(self.mismatch("multiply", rhs));
        }

        Ok(Matrix::from_computed(
            (0..self.rows_count())
                .map(|i| {
                    (0..rhs.columns_count())
                        .map(|j| {
                            (0..self.columns_count())
                                .map(|k| self.at(i, k) * rhs.at(k, j))
                                .sum::<Number>()
                        })
                        .collect()
                })
                .collect(),
        ))
    }

    /// `self * rhs⁻¹`.
    pub fn divide(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.columns_count() != rhs.rows_count() {
            return Err(self.mismatch("divide", rhs));
        }
        self.multiply(&rhs.inverse()?)
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, rhs: &Matrix) -> Result<Matrix> {
        self.sum(rhs)
    }
}

impl ops::Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix> {
        self.subtract(rhs)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix> {
        self.multiply(rhs)
    }
}

impl ops::Mul<Number> for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Number) -> Result<Matrix> {
        self.multiply_scalar(rhs)
    }
}

impl ops::Div<&Matrix> for &Matrix {
    type Output = Result<Matrix>;

    fn div(self, rhs: &Matrix) -> Result<Matrix> {
        self.divide(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
