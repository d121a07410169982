//! # prefixa
//!
//! prefixa evaluates arithmetic written in prefix notation and translates it
//! into infix code. An expression such as `sub 2 sum 1 3 4` is lexed,
//! parsed into a syntax tree, evaluated to `-6`, and compiled to
//! `(2 - (1 + 3 + 4))`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        compiler::compile, evaluator::core::evaluate, lexer::lex, parser::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that
/// represent a prefix expression as a tree. The AST is built by the parser
/// and read by the evaluator and the compiler.
///
/// # Responsibilities
/// - Defines literal and operation nodes.
/// - Attaches token positions to nodes for error reporting.
/// - Maps operator keywords to their infix symbols.
pub mod ast;
/// Provides unified error types for parsing, evaluation and compilation.
///
/// Every stage that can fail has its own error enum. Each variant carries
/// the token position where the failure was detected.
pub mod error;
/// Holds the stages that turn source text into results.
///
/// # Responsibilities
/// - Splits source text into tokens.
/// - Builds the syntax tree.
/// - Evaluates the tree and compiles it to infix code.
pub mod interpreter;
/// Runs all stages over one line and keeps every stage's output.
pub mod pipeline;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates a prefix expression given as source text.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use prefixa::{evaluate_source, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_source("sum 1 2 3"), Ok(Value::Integer(6)));
/// assert!(evaluate_source("div 4 0").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Error> {
    let ast = parse(&lex(source))?;
    Ok(evaluate(&ast)?)
}

/// Compiles a prefix expression given as source text to infix code.
///
/// # Errors
/// Returns an error if parsing or compilation fails.
///
/// # Examples
/// ```
/// use prefixa::compile_source;
///
/// assert_eq!(compile_source("mul 2 3 4").unwrap(), "(2 * 3 * 4)");
/// assert_eq!(compile_source("div 4 0").unwrap(), "(4 / 0)");
/// ```
pub fn compile_source(source: &str) -> Result<String, Error> {
    let ast = parse(&lex(source))?;
    Ok(compile(&ast)?)
}
