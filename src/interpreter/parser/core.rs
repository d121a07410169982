use tracing::{debug, trace};

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::parser::cursor::Cursor,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of operations.
///
/// The parser, the evaluator and the compiler all recurse once per level, so
/// this also bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parses a token sequence into a single expression tree.
///
/// Exactly one expression is read starting at the first token. Tokens left
/// over after that expression is complete are ignored; this can only happen
/// when the root is a literal, since an operation keeps taking operands while
/// any token remains.
///
/// # Errors
/// - `UnexpectedEndOfInput` if `tokens` is empty.
/// - `LiteralTooLarge` if a literal does not fit in an `i64`.
/// - `NestingTooDeep` if operations nest deeper than [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use prefixa::{
///     ast::{Expr, Operator, OperatorKind},
///     interpreter::{lexer::lex, parser::core::parse},
/// };
///
/// let ast = parse(&lex("sum 1 2")).unwrap();
///
/// assert_eq!(ast,
///            Expr::Operation { operator: Operator::Known(OperatorKind::Sum),
///                              operands: vec![Expr::Number { value:    1,
///                                                            position: 1, },
///                                             Expr::Number { value:    2,
///                                                            position: 2, }],
///                              position: 0, });
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(tokens: &[String]) -> ParseResult<Expr> {
    let mut cursor = Cursor::new(tokens);
    let expr = parse_expression(&mut cursor, 0)?;

    if cursor.remaining() > 0 {
        debug!(ignored = cursor.remaining(),
               position = cursor.position(),
               "Trailing tokens after root expression");
    }

    Ok(expr)
}

/// Parses one expression at the cursor.
///
/// The next token is inspected without being consumed: a literal delegates
/// to [`parse_number`], anything else (including the end of input) to
/// [`parse_operation`].
///
/// Grammar: `expression := number | operation`
///
/// # Parameters
/// - `cursor`: Shared read position.
/// - `depth`: Number of operations enclosing this expression.
pub fn parse_expression(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Expr> {
    match cursor.peek() {
        Some(token) if is_number_literal(token) => parse_number(cursor),
        _ => parse_operation(cursor, depth),
    }
}

/// Parses an integer literal.
///
/// Grammar: `number := [0-9]+`
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `LiteralTooLarge` if the digits overflow an `i64`.
pub fn parse_number(cursor: &mut Cursor<'_>) -> ParseResult<Expr> {
    let (position, token) = cursor.consume()?;
    let value = token.parse::<i64>()
                     .map_err(|_| ParseError::LiteralTooLarge { token: token.to_string(),
                                                                position })?;

    Ok(Expr::Number { value, position })
}

/// Parses an operator keyword followed by its operands.
///
/// Operands are read for as long as tokens remain, so the operand count is
/// decided by the input alone. An operator at the very end of the input gets
/// no operands, and a keyword outside the known four becomes
/// [`Operator::Unknown`]; both are left for the evaluator and compiler to
/// reject.
///
/// Grammar: `operation := keyword expression*`
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left for the keyword.
/// - `NestingTooDeep` if `depth` has reached [`MAX_NESTING_DEPTH`].
/// - Propagates errors from operand parsing.
pub fn parse_operation(cursor: &mut Cursor<'_>, depth: usize) -> ParseResult<Expr> {
    let (position, keyword) = cursor.consume()?;

    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                position });
    }

    let operator = Operator::from_token(keyword);
    trace!(%operator, position, depth, "Parsing operation");

    let mut operands = Vec::new();
    while cursor.peek().is_some() {
        operands.push(parse_expression(cursor, depth + 1)?);
    }

    Ok(Expr::Operation { operator,
                         operands,
                         position })
}

/// Whether a token is spelled as an integer literal (`^[0-9]+$`).
///
/// # Example
/// ```
/// use prefixa::interpreter::parser::core::is_number_literal;
///
/// assert!(is_number_literal("042"));
/// assert!(!is_number_literal("-1"));
/// assert!(!is_number_literal("1.5"));
/// assert!(!is_number_literal(""));
/// ```
#[must_use]
pub fn is_number_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
