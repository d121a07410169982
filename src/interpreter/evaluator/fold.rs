use crate::{
    ast::OperatorKind,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Folds operand values with an operator.
///
/// - `sum` starts from `0` and adds every value.
/// - `mul` starts from `1` and multiplies every value.
/// - `sub` and `div` have no seed: the first value is the starting
///   accumulator and each later value is subtracted from, or divides, the
///   running result from left to right.
///
/// # Parameters
/// - `kind`: The operator to fold with.
/// - `values`: Operand values in source order.
/// - `position`: Token index of the operator, for error reporting.
///
/// # Errors
/// - `InvalidArity` for `sub` or `div` without operands.
/// - Any error from [`combine`].
///
/// # Example
/// ```
/// use prefixa::{
///     ast::OperatorKind,
///     interpreter::{evaluator::fold::fold, value::core::Value},
/// };
///
/// let values = [Value::Integer(10), Value::Integer(3), Value::Integer(2)];
///
/// assert_eq!(fold(OperatorKind::Sub, &values, 0), Ok(Value::Integer(5)));
/// assert_eq!(fold(OperatorKind::Sum, &[], 0), Ok(Value::Integer(0)));
/// assert_eq!(fold(OperatorKind::Mul, &[], 0), Ok(Value::Integer(1)));
/// assert!(fold(OperatorKind::Div, &[], 0).is_err());
/// ```
pub fn fold(kind: OperatorKind, values: &[Value], position: usize) -> EvalResult<Value> {
    let (seed, rest) = match kind {
        OperatorKind::Sum => (Value::Integer(0), values),
        OperatorKind::Mul => (Value::Integer(1), values),
        OperatorKind::Sub | OperatorKind::Div => {
            let (first, rest) = values.split_first()
                                      .ok_or(EvalError::InvalidArity { operator: kind,
                                                                       position })?;
            (*first, rest)
        },
    };

    rest.iter()
        .try_fold(seed, |acc, value| combine(kind, acc, *value, position))
}

/// Applies one step of a fold to two values.
///
/// Two integers are combined with checked 64 bit arithmetic. Integer division
/// stays an integer when it is exact; otherwise both sides are promoted to
/// real. When either side is already real the step is carried out in
/// floating point. Division by zero is checked for both representations.
///
/// # Errors
/// - `DivisionByZero` if `kind` is `div` and `right` is zero.
/// - `Overflow` if integer arithmetic leaves the `i64` range or a real
///   result is not finite.
/// - `Underflow` if a real product or quotient rounds to zero.
/// - `PrecisionLoss` if an integer is too large to promote exactly.
///
/// # Example
/// ```
/// use prefixa::{
///     ast::OperatorKind,
///     interpreter::{evaluator::fold::combine, value::core::Value},
/// };
///
/// let exact = combine(OperatorKind::Div, Value::Integer(8), Value::Integer(2), 0);
/// let inexact = combine(OperatorKind::Div, Value::Integer(7), Value::Integer(2), 0);
///
/// assert_eq!(exact, Ok(Value::Integer(4)));
/// assert_eq!(inexact, Ok(Value::Real(3.5)));
/// ```
pub fn combine(kind: OperatorKind,
               left: Value,
               right: Value,
               position: usize)
               -> EvalResult<Value> {
    use OperatorKind::{Div, Mul, Sub, Sum};

    if kind == Div && right.is_zero() {
        return Err(EvalError::DivisionByZero { position });
    }

    let overflow = EvalError::Overflow { operator: kind,
                                         position };

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => match kind {
            Sum => a.checked_add(b).map(Value::Integer).ok_or(overflow),
            Sub => a.checked_sub(b).map(Value::Integer).ok_or(overflow),
            Mul => a.checked_mul(b).map(Value::Integer).ok_or(overflow),
            Div => {
                if a.checked_rem(b).ok_or(overflow.clone())? == 0 {
                    a.checked_div(b).map(Value::Integer).ok_or(overflow)
                } else {
                    combine_real(kind, left.as_real(position)?, right.as_real(position)?, position)
                }
            },
        },
        _ => combine_real(kind, left.as_real(position)?, right.as_real(position)?, position),
    }
}

/// Applies one fold step in floating point.
///
/// Results must stay finite, and a product or quotient of two non-zero
/// values must not round to zero.
///
/// # Errors
/// - `Overflow` if the result is infinite or NaN.
/// - `Underflow` if a `mul` or `div` of non-zero values rounds to zero.
///
/// # Example
/// ```
/// use prefixa::{
///     ast::OperatorKind,
///     error::EvalError,
///     interpreter::{evaluator::fold::combine_real, value::core::Value},
/// };
///
/// assert_eq!(combine_real(OperatorKind::Sub, 1.5, 2.0, 0), Ok(Value::Real(-0.5)));
/// assert_eq!(combine_real(OperatorKind::Mul, f64::MAX, 2.0, 1),
///            Err(EvalError::Overflow { operator: OperatorKind::Mul,
///                                      position: 1, }));
/// assert_eq!(combine_real(OperatorKind::Div, f64::MIN_POSITIVE, 1e300, 2),
///            Err(EvalError::Underflow { operator: OperatorKind::Div,
///                                       position: 2, }));
/// ```
pub fn combine_real(kind: OperatorKind, a: f64, b: f64, position: usize) -> EvalResult<Value> {
    use OperatorKind::{Div, Mul, Sub, Sum};

    let result = match kind {
        Sum => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
    };

    if !result.is_finite() {
        return Err(EvalError::Overflow { operator: kind,
                                         position });
    }
    if result == 0.0 && a != 0.0 && b != 0.0 && matches!(kind, Mul | Div) {
        return Err(EvalError::Underflow { operator: kind,
                                          position });
    }

    Ok(Value::Real(result))
}
