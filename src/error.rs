//! Error types for matrix operations

use crate::rings::number::ElementKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Malformed construction input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("a matrix needs at least one row and one column")]
    Empty,
    #[error("row index {found} found where {expected} was expected")]
    RowIndex { expected: usize, found: usize },
    #[error("column index {found} found in row {row} where {expected} was expected")]
    ColumnIndex {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {column}) is {found}, expected {expected}")]
    MixedKinds {
        row: usize,
        column: usize,
        expected: ElementKind,
        found: ElementKind,
    },
}

/// A 1-based row or column argument outside `[1, count]`.
///
/// `Invalid` keeps the signed value so that negative indices coming from
/// bindings are reported as given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("{axis} index {index} is invalid")]
    Invalid { axis: Axis, index: i64 },
    #[error("{axis} index {index} exceeds matrix size {size}")]
    ExceedsSize {
        axis: Axis,
        index: usize,
        size: usize,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("invalid matrix: {0}")]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("{operation}: dimensions {left:?} and {right:?} are not compatible")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square ({rows}x{columns})")]
    NotSquare { rows: usize, columns: usize },
    #[error("matrix is singular")]
    Singular,
    #[error("invalid scalar: {0}")]
    InvalidScalar(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
