/// Core parsing logic.
///
/// Contains the recursive-descent rules for expressions, numbers and
/// operations, and the entry point that parses a whole token sequence.
pub mod core;

/// The shared read position.
///
/// Tracks which token is next and hands tokens out one at a time to the
/// parsing rules.
pub mod cursor;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse};
