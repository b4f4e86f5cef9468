//! Numeric values.
//!
//! A number is either a 64-bit signed integer or a finite double. The two
//! forms are kept apart: `1` and `1.0` are different values and render
//! differently, so a float survives a write/parse cycle as a float.

use std::fmt;

use crate::error::{ErrorCode, JsonResult};

/// A JSON number.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Integer form, rendered in plain decimal.
    Integer(i64),
    /// Finite floating-point form.
    Float(f64),
}

impl Number {
    /// Build a float, rejecting NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(Number::Float(value))
    }

    /// Returns true for the integer form.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns true for the float form.
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The integer value, if this is the integer form.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(n) => Some(*n),
            Number::Float(_) => None,
        }
    }

    /// The value as a double. Integers beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Float(f) => *f,
        }
    }

    /// Append the text form to `out`.
    pub(crate) fn write_into(&self, out: &mut String) {
        match self {
            Number::Integer(n) => out.push_str(&n.to_string()),
            Number::Float(f) => {
                // Debug gives the shortest round-trip form and switches to
                // exponent notation for very large or small magnitudes.
                let text = format!("{f:?}");
                let integral = !text.contains(|c| matches!(c, '.' | 'e' | 'E'));
                out.push_str(&text);
                if integral {
                    out.push_str(".0");
                }
            }
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Integer(0)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

// Floats are finite by construction, so equality is reflexive.
impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_into(&mut out);
        f.write_str(&out)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl TryFrom<f64> for Number {
    type Error = ErrorCode;

    fn try_from(value: f64) -> JsonResult<Self> {
        Number::from_f64(value).ok_or(ErrorCode::NonFiniteNumber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_text() {
        assert_eq!(Number::from(0i64).to_string(), "0");
        assert_eq!(Number::from(-42i64).to_string(), "-42");
        assert_eq!(Number::from(i64::MAX).to_string(), "9223372036854775807");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(Number::Float(0.5).to_string(), "0.5");
        assert_eq!(Number::Float(1.0).to_string(), "1.0");
        assert_eq!(Number::Float(-2.25).to_string(), "-2.25");
        assert_eq!(Number::Float(1e300).to_string(), "1e300");
        assert_eq!(Number::Float(1e-7).to_string(), "1e-7");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert_eq!(
            Number::try_from(f64::NEG_INFINITY),
            Err(ErrorCode::NonFiniteNumber)
        );
        assert_eq!(Number::try_from(3.5), Ok(Number::Float(3.5)));
    }

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert_ne!(Number::Integer(1), Number::Float(1.0));
        assert_eq!(Number::Integer(1).as_f64(), Number::Float(1.0).as_f64());
        assert_eq!(Number::Float(1.0).as_i64(), None);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Number::default(), Number::Integer(0));
    }
}
