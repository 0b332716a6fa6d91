use crate::error::{Axis, IndexError};
use crate::rings::number::Number;

/// Tolerance used when comparing results of floating-point paths.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Map a 1-based `index` on `axis` to a 0-based offset, checking it against `size`.
pub fn to_offset(axis: Axis, index: usize, size: usize) -> Result<usize, IndexError> {
    if index < 1 {
        return Err(IndexError::Invalid {
            axis,
            index: index as i64,
        });
    }
    if index > size {
        return Err(IndexError::ExceedsSize { axis, index, size });
    }
    Ok(index - 1)
}

/// Narrow a signed 1-based index to `usize`, rejecting anything below 1.
///
/// The upper bound is left to [`to_offset`].
pub fn checked_index(axis: Axis, index: i64) -> Result<usize, IndexError> {
    if index < 1 {
        return Err(IndexError::Invalid { axis, index });
    }
    usize::try_from(index).map_err(|_| IndexError::Invalid { axis, index })
}

/// `(-1)^(row + col)` on 0-based coordinates.
#[inline(always)]
pub fn checkerboard_sign(row: usize, col: usize) -> Number {
    if (row + col) % 2 == 0 {
        Number::Integer(1)
    } else {
        Number::Integer(-1)
    }
}

pub fn approx_eq(a: Number, b: Number, epsilon: f64) -> bool {
    (a.as_f64() - b.as_f64()).abs() <= epsilon
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
