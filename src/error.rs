/// Parsing errors.
///
/// Defines the errors that can occur while turning a token sequence into a
/// syntax tree: running out of tokens, oversized literals and runaway
/// nesting.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while folding a syntax tree
/// into a number, such as division by zero or an unknown operator.
pub mod eval_error;
/// Code generation errors.
pub mod compile_error;

pub use compile_error::CompileError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of a pipeline stage.
///
/// Each stage reports its own error type; this wrapper lets callers that
/// drive several stages use `?` across all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token sequence did not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The expression could not be turned into infix code.
    #[error(transparent)]
    Compile(#[from] CompileError),
}
