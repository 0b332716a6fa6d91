use crate::error::{Axis, MatrixError};
use crate::matrix::arithmetic::Sign;
use crate::matrix::matrix::Matrix;
use crate::rings::number::Number;
use crate::utils;
use pyo3::exceptions::{PyIndexError, PyTypeError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyInt};
use std::convert::Infallible;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match error {
            MatrixError::Index(_) => PyIndexError::new_err(error.to_string()),
            MatrixError::Singular => PyZeroDivisionError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

impl<'py> FromPyObject<'py> for Number {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        if ob.is_instance_of::<PyBool>() {
            return Err(PyTypeError::new_err("bool is not a matrix element"));
        }
        if ob.is_instance_of::<PyInt>() {
            return Ok(Number::Integer(ob.extract::<i64>()?));
        }
        if ob.is_instance_of::<PyFloat>() {
            return Ok(Number::Float(ob.extract::<f64>()?));
        }
        Err(PyTypeError::new_err("matrix elements must be int or float"))
    }
}

impl<'py> IntoPyObject<'py> for Number {
    type Target = PyAny;
    type Output = Bound<'py, PyAny>;
    type Error = Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        Ok(match self {
            Number::Integer(value) => value.into_pyobject(py)?.into_any(),
            Number::Float(value) => value.into_pyobject(py)?.into_any(),
        })
    }
}

/// Python ints are signed; map anything below 1 to the same error the Rust
/// accessors raise for index 0.
fn index(axis: Axis, value: i64) -> Result<usize, MatrixError> {
    Ok(utils::checked_index(axis, value)?)
}

fn dimension(value: i64) -> Result<usize, MatrixError> {
    usize::try_from(value)
        .map_err(|_| MatrixError::InvalidScalar(format!("matrix size {} is negative", value)))
}

/// Python view of [`Matrix`]. Indices are 1-based, as on the Rust side.
#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix,
}

impl From<Matrix> for PyMatrix {
    fn from(inner: Matrix) -> PyMatrix {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[new]
    pub fn new(lines: Vec<Vec<Number>>) -> PyResult<PyMatrix> {
        Ok(Matrix::new(lines)?.into())
    }

    #[staticmethod]
    pub fn from_vector(values: Vec<Number>) -> PyResult<PyMatrix> {
        Ok(Matrix::from_vector(values)?.into())
    }

    #[staticmethod]
    #[pyo3(signature = (value, rows, columns=None))]
    pub fn filled(value: Number, rows: i64, columns: Option<i64>) -> PyResult<PyMatrix> {
        let rows = dimension(rows)?;
        let columns = columns.map(dimension).transpose()?;
        Ok(Matrix::filled(value, rows, columns)?.into())
    }

    pub fn to_list(&self) -> Vec<Vec<Number>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows_count()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.columns_count()
    }

    #[getter]
    #[allow(non_snake_case)]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn is_vector(&self) -> bool {
        self.inner.is_vector()
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    pub fn cell(&self, row: i64, col: i64) -> PyResult<Number> {
        let row = index(Axis::Row, row)?;
        let col = index(Axis::Column, col)?;
        Ok(self.inner.cell(row, col)?)
    }

    pub fn row_values(&self, row: i64) -> PyResult<Vec<Number>> {
        let row = index(Axis::Row, row)?;
        Ok(self.inner.row_values(row)?.to_vec())
    }

    pub fn column_values(&self, col: i64) -> PyResult<Vec<Number>> {
        let col = index(Axis::Column, col)?;
        Ok(self.inner.column_values(col)?)
    }

    pub fn cross_out(&self, row: i64, col: i64) -> PyResult<PyMatrix> {
        let row = index(Axis::Row, row)?;
        let col = index(Axis::Column, col)?;
        Ok(self.inner.cross_out(row, col)?.into())
    }

    pub fn determinant(&self) -> PyResult<Number> {
        Ok(self.inner.determinant()?)
    }

    pub fn is_singular(&self) -> PyResult<bool> {
        Ok(self.inner.is_singular()?)
    }

    pub fn identity(&self) -> PyMatrix {
        self.inner.identity().into()
    }

    pub fn minors(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.minors()?.into())
    }

    pub fn cofactors(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.cofactors()?.into())
    }

    pub fn adjoint(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.adjoint()?.into())
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn multiply_scalar(&self, value: Number) -> PyResult<PyMatrix> {
        Ok(self.inner.multiply_scalar(value)?.into())
    }

    pub fn divide_scalar(&self, value: Number) -> PyResult<PyMatrix> {
        Ok(self.inner.divide_scalar(value)?.into())
    }

    pub fn sum_scalar(&self, value: Number) -> PyResult<PyMatrix> {
        Ok(self.inner.sum_scalar(value)?.into())
    }

    pub fn subtract_scalar(&self, value: Number) -> PyResult<PyMatrix> {
        Ok(self.inner.subtract_scalar(value)?.into())
    }

    #[pyo3(signature = (rhs, sign=1))]
    pub fn sum(&self, rhs: &PyMatrix, sign: i64) -> PyResult<PyMatrix> {
        let sign = match sign {
            1 => Sign::Plus,
            -1 => Sign::Minus,
            _ => return Err(PyValueError::new_err("sign must be 1 or -1")),
        };
        Ok(self.inner.sum_with_sign(&rhs.inner, sign)?.into())
    }

    pub fn subtract(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.subtract(&rhs.inner)?.into())
    }

    pub fn multiply(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.multiply(&rhs.inner)?.into())
    }

    pub fn divide(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.divide(&rhs.inner)?.into())
    }

    pub fn __add__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        self.sum(rhs, 1)
    }

    pub fn __sub__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        self.subtract(rhs)
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        self.multiply(rhs)
    }

    pub fn __truediv__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        self.divide(rhs)
    }

    pub fn __eq__(&self, rhs: &Bound<'_, PyAny>) -> bool {
        match rhs.downcast::<PyMatrix>() {
            Ok(rhs) => self.inner == rhs.get().inner,
            Err(_) => false,
        }
    }

    pub fn __repr__(&self) -> String {
        format!("Matrix({})", self.inner.to_string().replace('\n', ", "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
