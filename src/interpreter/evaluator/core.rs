use tracing::trace;

use crate::{
    ast::{Expr, Operator},
    error::EvalError,
    interpreter::{evaluator::fold::fold, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to a single number.
///
/// This is the main entry point for evaluation. Literals evaluate to
/// themselves; operations evaluate their operands from left to right and
/// then fold the results with the operator.
///
/// # Errors
/// - `UnknownOperator` for a keyword other than `sum`, `sub`, `div`, `mul`.
/// - `InvalidArity` for `sub` or `div` without operands.
/// - `DivisionByZero`, `Overflow` or `PrecisionLoss` from the fold.
///
/// # Example
/// ```
/// use prefixa::interpreter::{
///     evaluator::core::evaluate, lexer::lex, parser::parse, value::core::Value,
/// };
///
/// let ast = parse(&lex("sub 2 sum 1 3 4")).unwrap();
///
/// assert_eq!(evaluate(&ast), Ok(Value::Integer(-6)));
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    let value = eval(expr)?;
    trace!(%value, "Evaluated expression");
    Ok(value)
}

fn eval(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Integer(*value)),
        Expr::Operation { operator,
                          operands,
                          position, } => eval_operation(operator, operands, *position),
    }
}

/// Evaluates an operation node.
///
/// Every operand is evaluated before the operator is looked at, so an error
/// inside an operand is reported ahead of an unknown operator.
///
/// # Parameters
/// - `operator`: The operator as parsed.
/// - `operands`: Operand expressions in source order.
/// - `position`: Token index of the operator.
pub fn eval_operation(operator: &Operator,
                      operands: &[Expr],
                      position: usize)
                      -> EvalResult<Value> {
    let values = operands.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;

    match operator {
        Operator::Known(kind) => fold(*kind, &values, position),
        Operator::Unknown(name) => Err(EvalError::UnknownOperator { name: name.clone(),
                                                                    position }),
    }
}
