/// Represents all errors that can occur while building the syntax tree.
///
/// Lexing never fails, so every error a source line can produce before
/// evaluation is one of these. Positions are token indices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A number or operator keyword was required but no token was left.
    #[error("Error at token {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Index one past the last token.
        position: usize,
    },
    /// A digit-only literal does not fit in a 64 bit signed integer.
    #[error("Error at token {position}: Literal {token} is too large.")]
    LiteralTooLarge {
        /// The offending literal.
        token:    String,
        /// Index of the literal.
        position: usize,
    },
    /// Operations were nested deeper than the parser allows.
    #[error("Error at token {position}: Expression nests deeper than {limit} operations.")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit:    usize,
        /// Index of the operator that exceeded it.
        position: usize,
    },
}
