use logos::Logos;
use tracing::trace;

/// A run of source text as seen by the lexer.
///
/// The language only distinguishes words from the whitespace between them.
/// Whether a word is a number or an operator keyword is decided by the
/// parser, so the token carries nothing but its text.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
enum Lexeme {
    /// Any run of non-whitespace characters, such as `sum` or `42`.
    #[regex(r"[^\s]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
    /// Spaces, tabs, newlines and other Unicode whitespace.
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}

/// Splits source text into whitespace-separated tokens.
///
/// Empty pieces are dropped and the order of the remaining pieces is kept.
/// Lexing cannot fail: every non-empty run of non-whitespace characters is a
/// valid token, and an empty or all-whitespace input yields no tokens.
///
/// # Example
/// ```
/// use prefixa::interpreter::lexer::lex;
///
/// assert_eq!(lex("  sum 1\t2\n 3 "), vec!["sum", "1", "2", "3"]);
/// assert!(lex(" \t ").is_empty());
/// ```
#[must_use]
#[tracing::instrument(level = "trace", skip_all)]
pub fn lex(source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Word(word)) => tokens.push(word),
            Ok(Lexeme::Whitespace) => {},
            Err(()) => tokens.push(lexer.slice().to_string()),
        }
    }

    trace!(count = tokens.len(), "Lexed source");
    tokens
}
