use std::fmt;

use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        compiler::{CompileResult, compile},
        evaluator::core::{EvalResult, evaluate},
        lexer::lex,
        parser::parse,
        value::core::Value,
    },
};

/// What the stages after a successful parse produced.
///
/// Evaluation and compilation consume the same tree independently, so one
/// can fail while the other succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The parsed expression tree.
    pub ast:   Expr,
    /// The evaluated number.
    pub value: EvalResult<Value>,
    /// The infix translation.
    pub code:  CompileResult<String>,
}

/// Everything one run of the pipeline produced.
///
/// A failed stage does not hide the output of earlier stages: the tokens are
/// always available, and the tree is available whenever parsing succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The lexed tokens.
    pub tokens: Vec<String>,
    /// The parse outcome and, if it succeeded, the later stages.
    pub parsed: Result<Analysis, ParseError>,
}

impl Report {
    /// Whether every stage succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.first_error().is_none()
    }

    /// The error of the earliest failing stage, evaluation before
    /// compilation.
    #[must_use]
    pub fn first_error(&self) -> Option<Error> {
        match &self.parsed {
            Err(e) => Some(e.clone().into()),
            Ok(Analysis { value: Err(e), .. }) => Some(e.clone().into()),
            Ok(Analysis { code: Err(e), .. }) => Some(e.clone().into()),
            Ok(_) => None,
        }
    }

    /// A one-line summary holding only the compiled code and the value.
    ///
    /// # Example
    /// ```
    /// use prefixa::pipeline::run;
    ///
    /// assert_eq!(run("mul 2 3 4").summary(), "(2 * 3 * 4) = 24");
    /// assert_eq!(run("").summary(),
    ///            "error: Error at token 0: Unexpected end of input.");
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.parsed {
            Ok(analysis) => {
                format!("{} = {}", outcome(&analysis.code), outcome(&analysis.value))
            },
            Err(e) => format!("error: {e}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tokens:   {:?}", self.tokens)?;

        match &self.parsed {
            Ok(analysis) => {
                writeln!(f, "ast:      {:?}", analysis.ast)?;
                writeln!(f, "value:    {}", outcome(&analysis.value))?;
                write!(f, "compiled: {}", outcome(&analysis.code))
            },
            Err(e) => {
                writeln!(f, "ast:      error: {e}")?;
                writeln!(f, "value:    skipped")?;
                write!(f, "compiled: skipped")
            },
        }
    }
}

fn outcome<T: fmt::Display, E: fmt::Display>(result: &Result<T, E>) -> String {
    match result {
        Ok(v) => v.to_string(),
        Err(e) => format!("error: {e}"),
    }
}

/// Runs every stage over one source line.
///
/// Lexing always succeeds. If parsing fails the later stages are skipped;
/// otherwise both evaluation and compilation run on the tree, whatever the
/// other one returns.
///
/// # Example
/// ```
/// use prefixa::{error::EvalError, pipeline::run};
///
/// let report = run("div 4 0");
/// let analysis = report.parsed.as_ref().unwrap();
///
/// assert_eq!(report.tokens, vec!["div", "4", "0"]);
/// assert_eq!(analysis.value, Err(EvalError::DivisionByZero { position: 0 }));
/// assert_eq!(analysis.code.as_deref(), Ok("(4 / 0)"));
/// ```
#[must_use]
pub fn run(source: &str) -> Report {
    let tokens = lex(source);
    let parsed = parse(&tokens).map(|ast| {
                                   let value = evaluate(&ast);
                                   let code = compile(&ast);
                                   Analysis { ast, value, code }
                               });

    let report = Report { tokens, parsed };
    if let Some(e) = report.first_error() {
        debug!(error = %e, "Pipeline stage failed");
    }
    report
}
