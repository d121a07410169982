/// The compiler module turns a syntax tree into infix source code.
///
/// It walks the same tree as the evaluator but never computes anything: each
/// operation becomes a parenthesized group of its operands joined by the
/// operator's symbol.
///
/// # Responsibilities
/// - Maps `sum`, `sub`, `div`, `mul` to `+`, `-`, `/`, `*`.
/// - Reports unknown operator keywords.
pub mod compiler;
/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator traverses the AST, folds each operation's operand values
/// with its operator and produces one number. It reports runtime errors such
/// as division by zero or an operator without operands.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// Tokens are whitespace-separated words; the lexer does not classify them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser reads the token sequence through a shared cursor and
/// constructs one expression tree by recursive descent.
///
/// # Responsibilities
/// - Recognizes integer literals and operator keywords.
/// - Attaches token positions to nodes for error reporting.
/// - Reports running out of input, oversized literals and runaway nesting.
pub mod parser;
/// The value module defines the result type of evaluation.
pub mod value;
