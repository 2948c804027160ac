//! Error types for fixed-point arithmetic and price conversion.
//!
//! Every fallible operation in the crate returns [`ConvertError`]. None of
//! the variants are transient: the inputs caused the failure, so a caller
//! must correct them (for example fetch a fresh non-zero price) rather than
//! retry the same call.

use thiserror::Error;

/// Errors returned by [`FixedPoint`](crate::types::FixedPoint) operations
/// and the conversion functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A scale was negative or larger than 38 (the largest power of ten
    /// that fits in a `u128`).
    #[error("invalid scale {0}, expected 0..=38")]
    InvalidScale(i32),

    /// The divisor was zero, most commonly a zero price.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate or final magnitude did not fit the target width.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Multiply and divide require both operands at the same scale.
    #[error("scale mismatch: {left} vs {right}")]
    ScaleMismatch { left: i32, right: i32 },

    /// Fixed-point values are unsigned.
    #[error("negative value cannot be represented")]
    NegativeValue,

    #[error("decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ConvertError>;
