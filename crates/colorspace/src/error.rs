//! Error types for the colorspace crate.

use thiserror::Error;

/// Errors produced by the fallible color constructors and parsers.
///
/// The conversion functions themselves never fail; these only come out of
/// hex parsing, validated constructors and `TryFrom` impls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// A component fell outside its documented range.
    #[error("{component} out of range: {value}")]
    OutOfRange { component: &'static str, value: f64 },

    /// A component was NaN or infinite.
    #[error("{component} is not a finite number")]
    NonFinite { component: &'static str },
}
