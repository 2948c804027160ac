//! Settlement-currency amounts.
//!
//! Lightning payments are denominated in milli-satoshi: 1/1000 of the
//! smallest on-chain unit. One bitcoin is 100,000,000 satoshi, so one
//! bitcoin is 100,000,000,000 milli-satoshi.

use std::fmt;

/// Satoshi in one bitcoin.
pub const SATOSHI_PER_BITCOIN: u64 = 100_000_000;

/// Milli-satoshi in one satoshi.
pub const MILLI_SATOSHI_PER_SATOSHI: u64 = 1_000;

/// Milli-satoshi in one bitcoin.
pub const MILLI_SATOSHI_PER_BITCOIN: u64 = SATOSHI_PER_BITCOIN * MILLI_SATOSHI_PER_SATOSHI;

/// A payment amount in milli-satoshi.
///
/// ## Example
///
/// ```
/// use rfq_math::types::MilliSatoshi;
///
/// let amt = MilliSatoshi::from_satoshis(2);
/// assert_eq!(amt, MilliSatoshi(2_000));
/// assert_eq!(amt.to_string(), "2000 mSAT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MilliSatoshi(pub u64);

impl MilliSatoshi {
    /// Amount from whole satoshi. Saturates at `u64::MAX`.
    pub const fn from_satoshis(sats: u64) -> Self {
        Self(sats.saturating_mul(MILLI_SATOSHI_PER_SATOSHI))
    }

    /// Absolute difference between two amounts.
    pub const fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for MilliSatoshi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mSAT", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MILLI_SATOSHI_PER_BITCOIN, 100_000_000_000);
    }

    #[test]
    fn test_satoshi_conversion() {
        assert_eq!(MilliSatoshi::from_satoshis(5).0, 5_000);
        assert_eq!(MilliSatoshi::from_satoshis(u64::MAX).0, u64::MAX);
    }

    #[test]
    fn test_abs_diff() {
        assert_eq!(MilliSatoshi(10).abs_diff(MilliSatoshi(12)), 2);
        assert_eq!(MilliSatoshi(12).abs_diff(MilliSatoshi(10)), 2);
    }
}
