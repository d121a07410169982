/// Represents all errors that can occur while generating infix code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The operator keyword has no infix symbol.
    #[error("Error at token {position}: Unknown operator '{name}'.")]
    UnknownOperator {
        /// The keyword as written.
        name:     String,
        /// Index of the operator token.
        position: usize,
    },
}
