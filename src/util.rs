/// Numeric conversion helpers.
///
/// Integer results are promoted to `f64` when a division is not exact. These
/// helpers perform that promotion only when it is lossless, returning an
/// error for integers beyond `2^53 - 1` in magnitude.
pub mod num;
