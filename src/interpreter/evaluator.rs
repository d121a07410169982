/// Core evaluation logic.
///
/// Contains the tree walk that turns an expression into a value and the
/// dispatch from an operation node to its fold.
pub mod core;

/// Operator folds.
///
/// Implements the seeded (`sum`, `mul`) and unseeded (`sub`, `div`) folds and
/// the checked arithmetic behind each step.
pub mod fold;

pub use self::core::{EvalResult, evaluate};
