use crate::ast::OperatorKind;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The operator keyword is not one of `sum`, `sub`, `div` or `mul`.
    #[error("Error at token {position}: Unknown operator '{name}'.")]
    UnknownOperator {
        /// The keyword as written.
        name:     String,
        /// Index of the operator token.
        position: usize,
    },
    /// An unseeded fold (`sub`, `div`) was applied to no operands.
    #[error("Error at token {position}: '{operator}' needs at least one operand.")]
    InvalidArity {
        /// The operator missing its operands.
        operator: OperatorKind,
        /// Index of the operator token.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Error at token {position}: Division by zero.")]
    DivisionByZero {
        /// Index of the `div` token.
        position: usize,
    },
    /// Arithmetic left the 64 bit integer range or produced a non-finite
    /// real.
    #[error("Error at token {position}: Overflow while computing '{operator}'.")]
    Overflow {
        /// The operator whose fold overflowed.
        operator: OperatorKind,
        /// Index of the operator token.
        position: usize,
    },
    /// A real product or quotient of non-zero values rounded to zero.
    #[error("Error at token {position}: Real underflow while computing '{operator}'.")]
    Underflow {
        /// The operator whose fold underflowed.
        operator: OperatorKind,
        /// Index of the operator token.
        position: usize,
    },
    /// An integer could not be promoted to a real without losing precision.
    #[error("Error at token {position}: {value} cannot be represented exactly as a real.")]
    PrecisionLoss {
        /// The integer being promoted.
        value:    i64,
        /// Index of the operator token.
        position: usize,
    },
}
