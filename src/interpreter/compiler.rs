use tracing::trace;

use crate::{
    ast::{Expr, Operator},
    error::CompileError,
};

/// Result type used by the compiler.
pub type CompileResult<T> = Result<T, CompileError>;

/// Translates an expression tree into fully parenthesized infix code.
///
/// Literals are printed in decimal. An operation prints its compiled
/// operands joined by the operator's symbol with a space on each side, all
/// wrapped in parentheses. A single operand prints as `(x)` and no operands
/// as `()`.
///
/// Compiling never evaluates, so expressions that fail evaluation (such as a
/// division by zero) still compile.
///
/// # Errors
/// Returns `UnknownOperator` for a keyword other than `sum`, `sub`, `div` or
/// `mul`.
///
/// # Example
/// ```
/// use prefixa::interpreter::{compiler::compile, lexer::lex, parser::parse};
///
/// let ast = parse(&lex("sub 2 sum 1 3 4")).unwrap();
///
/// assert_eq!(compile(&ast).unwrap(), "(2 - (1 + 3 + 4))");
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn compile(expr: &Expr) -> CompileResult<String> {
    let code = compile_expr(expr)?;
    trace!(len = code.len(), "Compiled expression");
    Ok(code)
}

fn compile_expr(expr: &Expr) -> CompileResult<String> {
    match expr {
        Expr::Number { value, .. } => Ok(value.to_string()),
        Expr::Operation { operator,
                          operands,
                          position, } => compile_operation(operator, operands, *position),
    }
}

fn compile_operation(operator: &Operator,
                     operands: &[Expr],
                     position: usize)
                     -> CompileResult<String> {
    let parts = operands.iter()
                        .map(compile_expr)
                        .collect::<CompileResult<Vec<_>>>()?;

    let symbol = match operator {
        Operator::Known(kind) => kind.symbol(),
        Operator::Unknown(name) => {
            return Err(CompileError::UnknownOperator { name: name.clone(),
                                                       position });
        },
    };

    let separator = format!(" {symbol} ");
    Ok(format!("({})", parts.join(separator.as_str())))
}
