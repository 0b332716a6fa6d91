use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Storage kind of a matrix cell. A matrix holds cells of exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Integer,
    Float,
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Float => write!(f, "floating-point"),
        }
    }
}

/// A native scalar: either a signed integer or a double.
///
/// Integer arithmetic stays integral as long as it is exact. Overflow and
/// non-exact division fall back to floating point, so an operation never
/// panics and never silently truncates.
///
/// Equality is strict: `Integer(1) != Float(1.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn kind(&self) -> ElementKind {
        match self {
            Number::Integer(_) => ElementKind::Integer,
            Number::Float(_) => ElementKind::Float,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Same value, stored as a float.
    pub fn to_float(self) -> Number {
        Number::Float(self.as_f64())
    }

    /// Integers and finite floats. NaN and infinities are not usable as scalars.
    pub fn is_numeric(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }

    /// `0` of the given kind.
    pub fn zero_of(kind: ElementKind) -> Number {
        match kind {
            ElementKind::Integer => Number::Integer(0),
            ElementKind::Float => Number::Float(0.0),
        }
    }

    pub fn recip(self) -> Number {
        Number::one() / self
    }

    fn float_op(self, rhs: Number, op: fn(f64, f64) -> f64) -> Number {
        Number::Float(op(self.as_f64(), rhs.as_f64()))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Number {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Number {
        Number::Integer(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Number {
        Number::Float(value)
    }
}

impl ops::Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_add(b) {
                Some(v) => Number::Integer(v),
                None => self.float_op(rhs, |a, b| a + b),
            },
            _ => self.float_op(rhs, |a, b| a + b),
        }
    }
}

impl ops::Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_sub(b) {
                Some(v) => Number::Integer(v),
                None => self.float_op(rhs, |a, b| a - b),
            },
            _ => self.float_op(rhs, |a, b| a - b),
        }
    }
}

impl ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_mul(b) {
                Some(v) => Number::Integer(v),
                None => self.float_op(rhs, |a, b| a * b),
            },
            _ => self.float_op(rhs, |a, b| a * b),
        }
    }
}

impl ops::Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        match (self, rhs) {
            // `i64::MIN / -1` overflows, zero divisors go through f64
            (Number::Integer(a), Number::Integer(b)) if b != 0 && !(a == i64::MIN && b == -1) => {
                let (quotient, remainder) = a.div_rem(&b);
                if remainder == 0 {
                    Number::Integer(quotient)
                } else {
                    self.float_op(rhs, |a, b| a / b)
                }
            }
            _ => self.float_op(rhs, |a, b| a / b),
        }
    }
}

impl ops::Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(v) => match v.checked_neg() {
                Some(v) => Number::Integer(v),
                None => Number::Float(-(v as f64)),
            },
            Number::Float(v) => Number::Float(-v),
        }
    }
}

impl Zero for Number {
    fn zero() -> Number {
        Number::Integer(0)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Number::Integer(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }
}

impl One for Number {
    fn one() -> Number {
        Number::Integer(1)
    }
}

impl std::iter::Sum<Number> for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::zero(), |acc, n| acc + n)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{:?}", v),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_integral() {
        let a = Number::from(12);
        let b = Number::from(4);
        assert_eq!(a + b, Number::Integer(16));
        assert_eq!(a - b, Number::Integer(8));
        assert_eq!(a * b, Number::Integer(48));
        assert_eq!(a / b, Number::Integer(3));
        assert_eq!(-a, Number::Integer(-12));
    }

    #[test]
    fn test_fractional_division_promotes() {
        assert_eq!(Number::from(1) / Number::from(4), Number::Float(0.25));
        assert_eq!(Number::from(3).recip(), Number::Float(1.0 / 3.0));
        assert_eq!(Number::from(-1).recip(), Number::Integer(-1));
    }

    #[test]
    fn test_overflow_promotes() {
        let big = Number::Integer(i64::MAX);
        assert_eq!(big + Number::from(1), Number::Float(i64::MAX as f64 + 1.0));
        assert_eq!(big * Number::from(2), Number::Float(i64::MAX as f64 * 2.0));
        assert_eq!(
            Number::Integer(i64::MIN) / Number::from(-1),
            Number::Float(-(i64::MIN as f64))
        );
        assert_eq!(-Number::Integer(i64::MIN), Number::Float(-(i64::MIN as f64)));
    }

    #[test]
    fn test_division_by_zero_does_not_panic() {
        assert_eq!(Number::from(1) / Number::from(0), Number::Float(f64::INFINITY));
        assert!(!(Number::from(1) / Number::from(0)).is_numeric());
    }

    #[test]
    fn test_mixed_kinds() {
        assert_eq!(Number::from(1) + Number::from(0.5), Number::Float(1.5));
        assert_eq!(Number::from(2.0) * Number::from(3), Number::Float(6.0));
        assert_ne!(Number::from(1), Number::from(1.0));
        assert_eq!(Number::from(1).kind(), ElementKind::Integer);
        assert_eq!(Number::from(1.0).kind(), ElementKind::Float);
    }

    #[test]
    fn test_zero_and_numeric() {
        assert!(Number::Float(-0.0).is_zero());
        assert!(Number::zero_of(ElementKind::Float).is_zero());
        assert!(!Number::Float(f64::NAN).is_numeric());
        assert!(Number::Float(1e300).is_numeric());
        assert_eq!(
            vec![Number::from(1), Number::from(2)].into_iter().sum::<Number>(),
            Number::Integer(3)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::from(-3).to_string(), "-3");
        assert_eq!(Number::from(1.5).to_string(), "1.5");
        assert_eq!(Number::from(2.0).to_string(), "2.0");
    }
}
