#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod arithmetic;
    pub mod derived;
    pub mod determinant;
    pub mod matrix;
    #[cfg(feature = "python")]
    pub mod matrix_py;
    pub mod transform;
}
pub mod rings {
    pub mod number;
}

pub mod utils;

pub use error::{Axis, ConstructionError, IndexError, MatrixError, Result};
pub use matrix::arithmetic::Sign;
pub use matrix::matrix::{Comparable, Matrix};
pub use rings::number::{ElementKind, Number};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_py::PyMatrix>()?;
    Ok(())
}
