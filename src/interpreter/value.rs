/// Core value type.
///
/// Defines the `Value` enum produced by evaluation, with its conversions and
/// display formatting.
pub mod core;

pub use self::core::Value;
