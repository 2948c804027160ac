//! Fixed-point decimal values with an explicit scale.
//!
//! ## Overview
//!
//! A [`FixedPoint`] is an unsigned `u128` magnitude plus a decimal scale:
//! the represented number is `value / 10^scale`. Unlike a float, every
//! operation is exact integer arithmetic followed by a single, documented
//! truncation.
//!
//! ## No Canonical Form
//!
//! `(value = 100, scale = 2)` and `(value = 1, scale = 0)` both represent
//! `1.00` but compare unequal. Rescale both sides to a common scale before
//! comparing values.
//!
//! ## Rounding
//!
//! Every lossy step truncates toward zero. Nothing ever rounds up, so an
//! amount derived from a supply cap can never exceed it.
//!
//! ## Examples
//!
//! ```
//! use rfq_math::types::FixedPoint;
//!
//! let price: FixedPoint = "50702.12".parse().unwrap();
//! assert_eq!(price.value(), 5_070_212);
//! assert_eq!(price.scale(), 2);
//!
//! let scaled = price.scale_to(6).unwrap();
//! assert_eq!(scaled.value(), 50_702_120_000);
//! assert_eq!(scaled.to_string(), "50702.120000");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use rust_decimal::Decimal;

use crate::error::{ConvertError, Result};

/// Largest supported scale: `10^38` is the largest power of ten below
/// `u128::MAX`.
pub const MAX_SCALE: i32 = 38;

// ============================================================================
// FixedPoint
// ============================================================================

/// An unsigned decimal number stored as `value / 10^scale`.
///
/// Values are immutable; every operation returns a new `FixedPoint`.
/// Multiply and divide widen to 256 bits internally and report
/// [`ConvertError::ArithmeticOverflow`] when the result does not fit back
/// into `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedPoint {
    /// Integer magnitude
    value: u128,

    /// Digits right of the decimal point, always within `0..=MAX_SCALE`
    scale: i32,
}

impl FixedPoint {
    /// Zero at scale zero.
    pub const ZERO: Self = Self { value: 0, scale: 0 };

    /// Construct a fixed-point value from a raw integer magnitude.
    ///
    /// No conversion is applied: `from_integer(123_456, 2)` is `1234.56`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidScale`] if `scale` is negative or above
    /// [`MAX_SCALE`].
    ///
    /// # Example
    ///
    /// ```
    /// use rfq_math::types::FixedPoint;
    ///
    /// let price = FixedPoint::from_integer(5_000_00u64, 2).unwrap();
    /// assert_eq!(price.to_string(), "5000.00");
    /// assert!(FixedPoint::from_integer(1u64, -1).is_err());
    /// ```
    pub fn from_integer(value: impl Into<u128>, scale: i32) -> Result<Self> {
        check_scale(scale)?;
        Ok(Self {
            value: value.into(),
            scale,
        })
    }

    /// Raw integer magnitude.
    #[inline]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Number of fractional digits.
    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// True when the magnitude is zero, at any scale.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Rescale to `new_scale` digits of precision.
    ///
    /// Scaling up multiplies by `10^(new_scale - scale)` and is exact.
    /// Scaling down divides by `10^(scale - new_scale)` and truncates toward
    /// zero; it never rounds to nearest.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidScale`] for a scale outside `0..=MAX_SCALE`
    /// - [`ConvertError::ArithmeticOverflow`] if scaling up exceeds `u128`
    ///
    /// # Example
    ///
    /// ```
    /// use rfq_math::types::FixedPoint;
    ///
    /// let v = FixedPoint::from_integer(12_345_600u64, 6).unwrap();
    /// assert_eq!(v.scale_to(2).unwrap(), FixedPoint::from_integer(1_234u64, 2).unwrap());
    /// ```
    pub fn scale_to(&self, new_scale: i32) -> Result<Self> {
        check_scale(new_scale)?;

        let value = match new_scale.cmp(&self.scale) {
            Ordering::Equal => self.value,
            Ordering::Greater => self
                .value
                .checked_mul(pow10(new_scale - self.scale))
                .ok_or(ConvertError::ArithmeticOverflow("rescale up exceeds u128"))?,
            Ordering::Less => self.value / pow10(self.scale - new_scale),
        };

        Ok(Self {
            value,
            scale: new_scale,
        })
    }

    /// Multiply two values at the same scale.
    ///
    /// Computes `(a * b) / 10^scale` in 256 bits, truncating toward zero.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ScaleMismatch`] if the scales differ
    /// - [`ConvertError::ArithmeticOverflow`] if the product exceeds `u128`
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_scale(other)?;

        let product = U256::from(self.value) * U256::from(other.value);
        let value = narrow(product / U256::exp10(self.scale as usize), "multiply")?;

        Ok(Self {
            value,
            scale: self.scale,
        })
    }

    /// Divide two values at the same scale.
    ///
    /// Computes `(a * 10^scale) / b` in 256 bits, truncating toward zero.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ScaleMismatch`] if the scales differ
    /// - [`ConvertError::DivisionByZero`] if `other` is zero
    /// - [`ConvertError::ArithmeticOverflow`] if the quotient exceeds `u128`
    ///
    /// # Example
    ///
    /// ```
    /// use rfq_math::types::FixedPoint;
    ///
    /// // 1.00 / 3.00 = 0.33
    /// let one = FixedPoint::from_integer(100u64, 2).unwrap();
    /// let three = FixedPoint::from_integer(300u64, 2).unwrap();
    /// assert_eq!(one.checked_div(&three).unwrap().value(), 33);
    /// ```
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        self.check_same_scale(other)?;
        if other.is_zero() {
            return Err(ConvertError::DivisionByZero);
        }

        // value < 2^128 and 10^scale <= 10^38 < 2^127, so this fits 256 bits
        let numerator = U256::from(self.value) * U256::exp10(self.scale as usize);
        let value = narrow(numerator / U256::from(other.value), "divide")?;

        Ok(Self {
            value,
            scale: self.scale,
        })
    }

    /// Integer part as `u128` (equivalent to `scale_to(0)?.value()`).
    pub fn to_u128(&self) -> Result<u128> {
        Ok(self.scale_to(0)?.value)
    }

    /// Integer part as `u64`.
    ///
    /// # Errors
    ///
    /// [`ConvertError::ArithmeticOverflow`] if the integer part exceeds
    /// `u64::MAX`.
    pub fn to_u64(&self) -> Result<u64> {
        u64::try_from(self.to_u128()?)
            .map_err(|_| ConvertError::ArithmeticOverflow("integer part exceeds u64"))
    }

    /// Convert to a `rust_decimal::Decimal`, keeping the scale.
    ///
    /// # Errors
    ///
    /// Fails when the magnitude exceeds 96 bits or the scale exceeds 28,
    /// the limits of `Decimal`.
    pub fn to_decimal(&self) -> Result<Decimal> {
        let mantissa = i128::try_from(self.value)
            .map_err(|_| ConvertError::ArithmeticOverflow("value exceeds decimal range"))?;
        Ok(Decimal::try_from_i128_with_scale(mantissa, self.scale as u32)?)
    }

    fn check_same_scale(&self, other: &Self) -> Result<()> {
        if self.scale != other.scale {
            return Err(ConvertError::ScaleMismatch {
                left: self.scale,
                right: other.scale,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Renders exactly `scale` fractional digits using integer arithmetic.
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.value);
        }

        let factor = pow10(self.scale);
        write!(
            f,
            "{}.{:0width$}",
            self.value / factor,
            self.value % factor,
            width = self.scale as usize
        )
    }
}

/// Keeps the decimal's own scale: `Decimal("5000.00")` becomes value
/// `500_000` at scale 2.
impl TryFrom<Decimal> for FixedPoint {
    type Error = ConvertError;

    fn try_from(decimal: Decimal) -> Result<Self> {
        let value = u128::try_from(decimal.mantissa()).map_err(|_| ConvertError::NegativeValue)?;
        Self::from_integer(value, decimal.scale() as i32)
    }
}

impl FromStr for FixedPoint {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(Decimal::from_str(s.trim())?)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn check_scale(scale: i32) -> Result<()> {
    if !(0..=MAX_SCALE).contains(&scale) {
        return Err(ConvertError::InvalidScale(scale));
    }
    Ok(())
}

/// `10^exp` for an exponent already validated to `0..=MAX_SCALE`.
#[inline]
fn pow10(exp: i32) -> u128 {
    debug_assert!((0..=MAX_SCALE).contains(&exp));
    10u128.pow(exp as u32)
}

fn narrow(wide: U256, context: &'static str) -> Result<u128> {
    if wide > U256::from(u128::MAX) {
        return Err(ConvertError::ArithmeticOverflow(context));
    }
    Ok(wide.as_u128())
}

// ============================================================================
// Unit Tests
// ============================================================================
