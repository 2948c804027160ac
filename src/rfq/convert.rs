//! Conversion between milli-satoshi payments and asset units.
//!
//! ## Price Representation
//!
//! A price is a [`FixedPoint`] meaning "asset units per one bitcoin", at
//! the asset's decimal display. For a USD asset with decimal display 6 and
//! a BTC price of 50,702.12 USD, the price is `50702.120000` (value
//! `50_702_120_000`, scale 6) and one asset unit is one micro-dollar.
//!
//! ## Working Precision
//!
//! Both directions lift every operand to [`ARITH_SCALE`] digits, perform
//! one divide and one multiply, then truncate back down. Each step
//! truncates toward zero, so the two functions are approximate inverses:
//! a payment converted to units and back never grows, and for prices where
//! one unit is worth at most two milli-satoshi it shrinks by at most 2.
//!
//! ## Example
//!
//! ```
//! use rfq_math::rfq::{milli_sat_to_units, units_to_milli_sat};
//! use rfq_math::types::{FixedPoint, MilliSatoshi};
//!
//! // 5,000.00 USD per BTC at decimal display 6
//! let price = FixedPoint::from_integer(5_000_00u64, 2).unwrap().scale_to(6).unwrap();
//!
//! let units = milli_sat_to_units(MilliSatoshi(200_000), price).unwrap();
//! assert_eq!(units, 10_000);
//!
//! let asset = FixedPoint::from_integer(units, price.scale()).unwrap();
//! assert_eq!(units_to_milli_sat(asset, price).unwrap(), MilliSatoshi(200_000));
//! ```

use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::types::{FixedPoint, MilliSatoshi, MILLI_SATOSHI_PER_BITCOIN};

/// Working precision of every conversion, in decimal digits.
///
/// One milli-satoshi is `10^-11` BTC, so at 11 digits a bitcoin amount
/// derived from any whole milli-satoshi payment is exact after the first
/// divide. The largest operand, `10^11` msat per BTC, becomes `10^22` at
/// this scale; a `u64` payment becomes at most `~1.8 * 10^30`, both far
/// below `u128::MAX` (`~3.4 * 10^38`). Products are formed in 256 bits.
pub const ARITH_SCALE: i32 = 11;

// ============================================================================
// Payment -> Asset Units
// ============================================================================

/// Convert a payment into asset units, keeping the fixed-point result.
///
/// The result is at the price's scale, so its `value()` is the number of
/// asset units at the asset's decimal display.
///
/// # Arguments
///
/// * `milli_sat` - Payment amount
/// * `units_per_btc` - Price in asset units per BTC at the asset's decimal display
///
/// # Errors
///
/// - [`ConvertError::DivisionByZero`] if the price is zero
/// - [`ConvertError::ArithmeticOverflow`] if an intermediate exceeds `u128`
pub fn milli_sat_to_units_fixed(
    milli_sat: MilliSatoshi,
    units_per_btc: FixedPoint,
) -> Result<FixedPoint> {
    reject_zero_price(&units_per_btc)?;

    let msat_fixed = FixedPoint::from_integer(milli_sat.0, 0)?.scale_to(ARITH_SCALE)?;
    let price_fixed = units_per_btc.scale_to(ARITH_SCALE)?;
    let one_btc = one_btc_in_milli_sat()?;

    let amount_btc = msat_fixed.checked_div(&one_btc)?;
    let amount_units = amount_btc.checked_mul(&price_fixed)?;

    trace!(
        msat = milli_sat.0,
        price = %units_per_btc,
        btc = %amount_btc,
        units = %amount_units,
        "converted payment to asset units"
    );

    amount_units.scale_to(units_per_btc.scale())
}

/// Convert a payment into an integer number of asset units.
///
/// # Errors
///
/// As [`milli_sat_to_units_fixed`], plus
/// [`ConvertError::ArithmeticOverflow`] when the unit count exceeds `u64`.
///
/// # Example
///
/// ```
/// use rfq_math::rfq::milli_sat_to_units;
/// use rfq_math::types::{FixedPoint, MilliSatoshi};
///
/// let price: FixedPoint = "50702.12".parse().unwrap();
/// let units = milli_sat_to_units(MilliSatoshi(1_973), price.scale_to(6).unwrap()).unwrap();
/// assert_eq!(units, 1_000);
/// ```
pub fn milli_sat_to_units(milli_sat: MilliSatoshi, units_per_btc: FixedPoint) -> Result<u64> {
    let units = milli_sat_to_units_fixed(milli_sat, units_per_btc).inspect_err(|err| {
        debug!(msat = milli_sat.0, price = %units_per_btc, %err, "payment conversion rejected")
    })?;

    u64::try_from(units.value())
        .map_err(|_| ConvertError::ArithmeticOverflow("asset units exceed u64"))
}

// ============================================================================
// Asset Units -> Payment
// ============================================================================

/// Convert an asset amount into a payment.
///
/// `asset_units` is a fixed-point amount of the asset; an integer unit
/// count at the asset's decimal display is
/// `FixedPoint::from_integer(units, units_per_btc.scale())`.
///
/// # Arguments
///
/// * `asset_units` - Asset amount to price
/// * `units_per_btc` - Price in asset units per BTC at the asset's decimal display
///
/// # Errors
///
/// - [`ConvertError::DivisionByZero`] if the price is zero
/// - [`ConvertError::ArithmeticOverflow`] if an intermediate exceeds `u128`
///   or the payment exceeds `u64`
pub fn units_to_milli_sat(
    asset_units: FixedPoint,
    units_per_btc: FixedPoint,
) -> Result<MilliSatoshi> {
    let msat = units_to_milli_sat_inner(asset_units, units_per_btc).inspect_err(|err| {
        debug!(units = %asset_units, price = %units_per_btc, %err, "asset conversion rejected")
    })?;

    Ok(MilliSatoshi(msat))
}

fn units_to_milli_sat_inner(asset_units: FixedPoint, units_per_btc: FixedPoint) -> Result<u64> {
    reject_zero_price(&units_per_btc)?;

    let units_fixed = asset_units.scale_to(ARITH_SCALE)?;
    let price_fixed = units_per_btc.scale_to(ARITH_SCALE)?;
    let one_btc = one_btc_in_milli_sat()?;

    let amount_btc = units_fixed.checked_div(&price_fixed)?;
    let amount_msat = amount_btc.checked_mul(&one_btc)?;

    trace!(
        units = %asset_units,
        price = %units_per_btc,
        btc = %amount_btc,
        msat = %amount_msat,
        "converted asset units to payment"
    );

    amount_msat.to_u64()
}

// ============================================================================
// Helpers
// ============================================================================

/// `100_000_000_000` milli-satoshi per bitcoin at [`ARITH_SCALE`].
pub(crate) fn one_btc_in_milli_sat() -> Result<FixedPoint> {
    FixedPoint::from_integer(MILLI_SATOSHI_PER_BITCOIN, 0)?.scale_to(ARITH_SCALE)
}

/// A zero price would otherwise yield zero units rather than an error.
fn reject_zero_price(units_per_btc: &FixedPoint) -> Result<()> {
    if units_per_btc.is_zero() {
        return Err(ConvertError::DivisionByZero);
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
