use crate::error::EvalError;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use prefixa::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert_eq!(i64_to_f64_checked(-big, "too big!"), Err("too big!"));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an integer operand for real arithmetic, reporting
/// [`EvalError::PrecisionLoss`] at `position` when it would be rounded.
///
/// ## Example
/// ```
/// use prefixa::{error::EvalError, util::num::integer_to_real};
///
/// assert_eq!(integer_to_real(-7, 0), Ok(-7.0));
/// assert_eq!(integer_to_real(i64::MAX, 3),
///            Err(EvalError::PrecisionLoss { value:    i64::MAX,
///                                           position: 3, }));
/// ```
pub fn integer_to_real(value: i64, position: usize) -> Result<f64, EvalError> {
    i64_to_f64_checked(value, EvalError::PrecisionLoss { value, position })
}
