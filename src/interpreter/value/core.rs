use crate::{interpreter::evaluator::core::EvalResult, util::num::integer_to_real};

/// The result of evaluating an expression.
///
/// Literals are always integers. A value only becomes real when a division
/// does not come out even, after which the rest of that fold continues in
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `position`: Token index for error reporting.
    ///
    /// # Example
    /// ```
    /// use prefixa::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(0).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(n) => integer_to_real(n, position),
        }
    }

    /// Returns the integer, or `None` for a real.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(_) => None,
        }
    }

    /// Whether the value equals zero, regardless of representation.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
