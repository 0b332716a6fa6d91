use crate::error::{Axis, ConstructionError, MatrixError, Result};
use crate::rings::number::{ElementKind, Number};
use crate::utils;
use itertools::Itertools;
use log::trace;
use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

/// Structural equality consumed by code that only knows it holds "some value".
pub trait Comparable: Any {
    fn equals(&self, other: &dyn Any) -> bool;
}

/// Immutable dense matrix, stored row-major.
///
/// Every instance holds at least one row and one column, and all of its cells
/// share one [`ElementKind`]. Operations never mutate the receiver; they return
/// a new matrix. The only interior state is the memoized determinant, written
/// at most once.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    kind: ElementKind,
    cells: Vec<Number>,
    pub(crate) determinant: OnceLock<Number>,
}

/// Check the construction invariants on nested rows and report the shape.
///
/// Positions in the returned errors are 0-based.
fn validate(
    lines: &[Vec<Number>],
) -> std::result::Result<(usize, usize, ElementKind), ConstructionError> {
    let first = lines.first().ok_or(ConstructionError::Empty)?;
    let kind = first.first().ok_or(ConstructionError::Empty)?.kind();
    let cols = first.len();

    for (row, line) in lines.iter().enumerate() {
        if line.len() != cols {
            return Err(ConstructionError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }
        if let Some(column) = line.iter().position(|cell| cell.kind() != kind) {
            return Err(ConstructionError::MixedKinds {
                row,
                column,
                expected: kind,
                found: line[column].kind(),
            });
        }
    }

    Ok((lines.len(), cols, kind))
}

impl Matrix {
    /// Build a matrix from nested rows, checking every invariant.
    pub fn new<N: Into<Number>>(lines: Vec<Vec<N>>) -> Result<Matrix> {
        let lines: Vec<Vec<Number>> = lines
            .into_iter()
            .map(|line| line.into_iter().map(Into::into).collect())
            .collect();
        let (rows, cols, kind) = validate(&lines)?;
        trace!("constructed {}x{} {} matrix", rows, cols, kind);

        Ok(Matrix::assemble(rows, cols, kind, lines))
    }

    /// A flat sequence becomes a single-row matrix.
    pub fn from_vector<N: Into<Number>>(values: Vec<N>) -> Result<Matrix> {
        Matrix::new(vec![values])
    }

    /// Build a matrix from explicitly keyed rows and cells.
    ///
    /// Row keys, and column keys within each row, must run `0, 1, 2, ...`
    /// in order.
    pub fn from_indexed<N: Into<Number>>(lines: Vec<(usize, Vec<(usize, N)>)>) -> Result<Matrix> {
        let mut rows = Vec::with_capacity(lines.len());

        for (expected, (found, cells)) in lines.into_iter().enumerate() {
            if found != expected {
                return Err(ConstructionError::RowIndex { expected, found }.into());
            }

            let mut row = Vec::with_capacity(cells.len());
            for (column, (key, value)) in cells.into_iter().enumerate() {
                if key != column {
                    return Err(ConstructionError::ColumnIndex {
                        row: expected,
                        expected: column,
                        found: key,
                    }
                    .into());
                }
                row.push(value.into());
            }
            rows.push(row);
        }

        Matrix::new(rows)
    }

    /// `rows x columns` matrix (square when `columns` is `None`) with every cell set to `value`.
    pub fn filled(value: impl Into<Number>, rows: usize, columns: Option<usize>) -> Result<Matrix> {
        let value = value.into();
        let cols = columns.unwrap_or(rows);

        if !value.is_numeric() {
            return Err(MatrixError::InvalidScalar(format!("{} is not a number", value)));
        }
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidScalar(format!(
                "cannot fill a {}x{} matrix",
                rows, cols
            )));
        }

        Ok(Matrix::assemble(
            rows,
            cols,
            value.kind(),
            vec![vec![value; cols]; rows],
        ))
    }

    /// Skip validation for rows produced by another validated operation.
    pub(crate) fn from_trusted(lines: Vec<Vec<Number>>) -> Matrix {
        debug_assert!(validate(&lines).is_ok(), "trusted rows break an invariant");
        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        let kind = lines
            .first()
            .and_then(|line| line.first())
            .map_or(ElementKind::Integer, Number::kind);

        Matrix::assemble(rows, cols, kind, lines)
    }

    /// Rows computed cell by cell may mix kinds after an overflow or a
    /// fractional division; promote them all to float in that case.
    pub(crate) fn from_computed(mut lines: Vec<Vec<Number>>) -> Matrix {
        let has_float = lines.iter().flatten().any(|c| c.kind() == ElementKind::Float);
        let has_integer = lines.iter().flatten().any(|c| c.kind() == ElementKind::Integer);
        if has_float && has_integer {
            lines
                .iter_mut()
                .flatten()
                .for_each(|cell| *cell = cell.to_float());
        }

        Matrix::from_trusted(lines)
    }

    fn assemble(rows: usize, cols: usize, kind: ElementKind, lines: Vec<Vec<Number>>) -> Matrix {
        Matrix {
            rows,
            cols,
            kind,
            cells: lines.into_iter().flatten().collect(),
            determinant: OnceLock::new(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<Number>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    pub fn rows_count(&self) -> usize {
        self.rows
    }

    pub fn columns_count(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn element_kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at 1-based (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Number> {
        let r = utils::to_offset(Axis::Row, row, self.rows)?;
        let c = utils::to_offset(Axis::Column, col, self.cols)?;
        Ok(self.at(r, c))
    }

    /// Read-only view of the 1-based `row`.
    pub fn row_values(&self, row: usize) -> Result<&[Number]> {
        let r = utils::to_offset(Axis::Row, row, self.rows)?;
        Ok(self.row_slice(r))
    }

    /// Copy of the 1-based column `col`.
    pub fn column_values(&self, col: usize) -> Result<Vec<Number>> {
        let c = utils::to_offset(Axis::Column, col, self.cols)?;
        Ok((0..self.rows).map(|r| self.at(r, c)).collect())
    }

    /// Same shape and every pair of cells within `epsilon`, regardless of kind.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| utils::approx_eq(*a, *b, epsilon))
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[Number] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn cells(&self) -> &[Number] {
        &self.cells
    }

    #[inline(always)]
    pub(crate) fn at(&self, row: usize, col: usize) -> Number {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                columns: self.cols,
            });
        }
        Ok(())
    }
}

impl PartialEq for Matrix {
    fn eq(&self, rhs: &Matrix) -> bool {
        self.rows == rhs.rows && self.cols == rhs.cols && self.cells == rhs.cells
    }
}

impl Comparable for Matrix {
    fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Matrix>().is_some_and(|rhs| self == rhs)
    }
}

impl<N: Into<Number>> TryFrom<Vec<Vec<N>>> for Matrix {
    type Error = MatrixError;

    fn try_from(lines: Vec<Vec<N>>) -> Result<Matrix> {
        Matrix::new(lines)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ret = self
            .cells
            .chunks(self.cols)
            .map(|line| format!("[{}]", line.iter().join(", ")))
            .join("\n");
        write!(f, "{}", ret)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    fn sample() -> Matrix {
        Matrix::new(vec![vec![4, -2], vec![-3, 0], vec![3, 5]]).unwrap()
    }

    #[test]
    fn test_flat_input_is_promoted() {
        let m = Matrix::from_vector(vec![1, 2, 3]).unwrap();
        assert_eq!(m.shape(), (1, 3));
        assert!(m.is_vector());
        assert!(!m.is_square());

        let m: Matrix = vec![vec![1.5, 2.5]].try_into().unwrap();
        assert_eq!(m.to_list(), vec![vec![Number::Float(1.5), Number::Float(2.5)]]);
    }

    #[test]
    fn test_predicates() {
        assert!(Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap().is_square());
        let m = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert!(!m.is_square());
        assert!(!m.is_vector());
        assert!(Matrix::new(vec![vec![1], vec![2]]).unwrap().is_vector());
    }

    #[test]
    fn test_ragged_rows() {
        assert_eq!(
            Matrix::new(vec![vec![1, 3], vec![5, 9, 2]]),
            Err(MatrixError::Construction(ConstructionError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            }))
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Vec<i64>> = vec![];
        assert_eq!(
            Matrix::new(empty),
            Err(MatrixError::Construction(ConstructionError::Empty))
        );
        assert_eq!(
            Matrix::from_vector(Vec::<i64>::new()),
            Err(MatrixError::Construction(ConstructionError::Empty))
        );
    }

    #[test]
    fn test_mixed_kinds() {
        let lines = vec![
            vec![Number::from(1), Number::from(2)],
            vec![Number::from(3), Number::from(4.0)],
        ];
        assert_eq!(
            Matrix::new(lines),
            Err(MatrixError::Construction(ConstructionError::MixedKinds {
                row: 1,
                column: 1,
                expected: ElementKind::Integer,
                found: ElementKind::Float
            }))
        );
    }

    #[test]
    fn test_indexed_rows() {
        let m = Matrix::from_indexed(vec![(0, vec![(0, 1), (1, 2)]), (1, vec![(0, 3), (1, 4)])])
            .unwrap();
        assert_eq!(m, Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap());

        assert_eq!(
            Matrix::from_indexed(vec![(1, vec![(0, 1)])]),
            Err(MatrixError::Construction(ConstructionError::RowIndex {
                expected: 0,
                found: 1
            }))
        );
        assert_eq!(
            Matrix::from_indexed(vec![(0, vec![(0, 1), (1, 2)]), (2, vec![(0, 3), (1, 4)])]),
            Err(MatrixError::Construction(ConstructionError::RowIndex {
                expected: 1,
                found: 2
            }))
        );
        assert_eq!(
            Matrix::from_indexed(vec![(0, vec![(0, 1), (2, 2)])]),
            Err(MatrixError::Construction(ConstructionError::ColumnIndex {
                row: 0,
                expected: 1,
                found: 2
            }))
        );
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.cell(3, 2), Ok(Number::Integer(5)));
        assert_eq!(m.row_values(1).unwrap(), &[Number::Integer(4), Number::Integer(-2)]);
        assert_eq!(
            m.column_values(2),
            Ok(vec![Number::Integer(-2), Number::Integer(0), Number::Integer(5)])
        );
    }

    #[test]
    fn test_accessors_out_of_bounds() {
        let m = sample();
        assert_eq!(
            m.cell(0, 1),
            Err(MatrixError::Index(IndexError::Invalid {
                axis: Axis::Row,
                index: 0
            }))
        );
        assert_eq!(
            m.cell(4, 1),
            Err(MatrixError::Index(IndexError::ExceedsSize {
                axis: Axis::Row,
                index: 4,
                size: 3
            }))
        );
        assert!(m.cell(1, 3).is_err());
        assert!(m.row_values(4).is_err());
        assert!(m.column_values(0).is_err());
        assert_eq!(
            m.cell(4, 1).unwrap_err().to_string(),
            "row index 4 exceeds matrix size 3"
        );
    }

    #[test]
    fn test_filled() {
        let m = Matrix::filled(1.5, 3, Some(4)).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.element_kind(), ElementKind::Float);
        assert_eq!(m, Matrix::new(vec![vec![1.5; 4]; 3]).unwrap());
        assert_eq!(
            Matrix::filled(2, 1, Some(2)).unwrap(),
            Matrix::from_vector(vec![2, 2]).unwrap()
        );
        assert!(m.cells().iter().all(|c| *c == Number::Float(1.5)));
        assert!(Matrix::filled(1.5, 3, None).unwrap().is_square());

        assert!(matches!(
            Matrix::filled(1, 0, None),
            Err(MatrixError::InvalidScalar(_))
        ));
        assert!(matches!(
            Matrix::filled(f64::NAN, 2, None),
            Err(MatrixError::InvalidScalar(_))
        ));
    }

    #[test]
    fn test_equality() {
        let a = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let floats = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let flat = Matrix::from_vector(vec![1, 2, 3, 4]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, floats);
        assert_ne!(a, flat);
        assert!(a.approx_eq(&floats, utils::DEFAULT_EPSILON));

        assert!(a.equals(&b));
        assert!(!a.equals(&"not a matrix"));
        assert!(!a.equals(&vec![vec![1, 2], vec![3, 4]]));
    }

    #[test]
    fn test_from_computed_unifies_kinds() {
        let m = Matrix::from_computed(vec![vec![Number::from(1), Number::from(0.5)]]);
        assert_eq!(m.element_kind(), ElementKind::Float);
        assert_eq!(m.to_list(), vec![vec![Number::Float(1.0), Number::Float(0.5)]]);
    }

    #[test]
    fn test_display() {
        let m = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
