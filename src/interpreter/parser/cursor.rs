use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// The read position of one parse.
///
/// All recursive-descent functions share a single cursor through `&mut`, so
/// the position only ever moves forward and every token is read at most
/// once. A cursor lives exactly as long as the [`parse`] call that created
/// it.
///
/// [`parse`]: crate::interpreter::parser::core::parse
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens:   &'a [String],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [String]) -> Self {
        Self { tokens,
               position: 0 }
    }

    /// Returns the token under the cursor without advancing, or `None` once
    /// every token has been consumed.
    ///
    /// # Example
    /// ```
    /// use prefixa::interpreter::parser::cursor::Cursor;
    ///
    /// let tokens = vec!["sum".to_string()];
    /// let cursor = Cursor::new(&tokens);
    ///
    /// assert_eq!(cursor.peek(), Some("sum"));
    /// assert_eq!(cursor.peek(), Some("sum"));
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Returns the token under the cursor together with its index and moves
    /// past it.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] if no token is left. The
    /// cursor does not move in that case.
    ///
    /// # Example
    /// ```
    /// use prefixa::{error::ParseError, interpreter::parser::cursor::Cursor};
    ///
    /// let tokens = vec!["1".to_string()];
    /// let mut cursor = Cursor::new(&tokens);
    ///
    /// assert_eq!(cursor.consume(), Ok((0, "1")));
    /// assert_eq!(cursor.consume(),
    ///            Err(ParseError::UnexpectedEndOfInput { position: 1 }));
    /// ```
    pub fn consume(&mut self) -> ParseResult<(usize, &'a str)> {
        let token = self.peek()
                        .ok_or(ParseError::UnexpectedEndOfInput { position: self.position })?;
        let position = self.position;
        self.position += 1;
        Ok((position, token))
    }

    /// Index of the next token to be read.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not consumed yet.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}
