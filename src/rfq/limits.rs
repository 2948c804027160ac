//! Limits implied by an asset's decimal display at a given price.
//!
//! The decimal display chosen for an asset decides how much value one asset
//! unit carries. Too few digits and small invoices cannot be paid at all;
//! too many and a `u64` supply cannot represent much value. This module
//! reports those trade-offs for a single price so an issuer can pick a
//! display, and so a negotiating peer can size the smallest shard of a
//! multi-path payment.

use std::fmt;

use crate::error::{ConvertError, Result};
use crate::rfq::convert::{
    milli_sat_to_units, one_btc_in_milli_sat, units_to_milli_sat, ARITH_SCALE,
};
use crate::types::{FixedPoint, MilliSatoshi, MILLI_SATOSHI_PER_BITCOIN};

/// Boundaries of an asset's decimal display at one price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDisplayLimits {
    /// Decimal display, equal to the price's scale
    pub decimal_display: i32,

    /// Price in asset units per BTC
    pub units_per_btc: FixedPoint,

    /// Whole BTC of value a full `u64` supply of units can represent
    pub max_issuable_btc: u64,

    /// Smallest payment that converts to at least one asset unit
    pub min_payable: MilliSatoshi,

    /// Value of the smallest unit step a conversion resolves, at
    /// [`ARITH_SCALE`]. This is one asset unit unless the decimal display
    /// exceeds `ARITH_SCALE`.
    pub msat_per_unit: FixedPoint,

    /// Price of one whole asset (e.g. one dollar) as a payment
    pub msat_per_whole_unit: MilliSatoshi,

    /// Asset units bought by one satoshi
    pub units_per_sat: u64,

    /// Number of payment shards the rounding error is computed for
    pub shards: u64,

    /// Worst-case cumulative truncation across `shards` payment parts
    pub max_mpp_rounding_error: MilliSatoshi,
}

impl DecimalDisplayLimits {
    /// Compute the limits for `units_per_btc`, assuming a payment split
    /// into `shards` parts.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::DivisionByZero`] if the price is zero
    /// - [`ConvertError::ArithmeticOverflow`] for a price too large for the
    ///   working scale
    ///
    /// # Example
    ///
    /// ```
    /// use rfq_math::rfq::DecimalDisplayLimits;
    /// use rfq_math::types::{FixedPoint, MilliSatoshi};
    ///
    /// let price: FixedPoint = "50702.12".parse().unwrap();
    /// let limits = DecimalDisplayLimits::compute(price.scale_to(6).unwrap(), 16).unwrap();
    ///
    /// assert_eq!(limits.min_payable, MilliSatoshi(2));
    /// assert_eq!(limits.max_mpp_rounding_error, MilliSatoshi(31));
    /// ```
    pub fn compute(units_per_btc: FixedPoint, shards: u64) -> Result<Self> {
        if units_per_btc.is_zero() {
            return Err(ConvertError::DivisionByZero);
        }
        let raw_price = units_per_btc.value();

        // Quotient of u64::MAX, so it always fits
        let max_issuable_btc = (u128::from(u64::MAX) / raw_price) as u64;

        // Conversions truncate prices with more than ARITH_SCALE digits, so
        // the limits are derived from the price the conversion actually uses.
        let working_price = units_per_btc
            .scale_to(units_per_btc.scale().min(ARITH_SCALE))?
            .value();
        if working_price == 0 {
            return Err(ConvertError::DivisionByZero);
        }

        // floor(msat * price / 10^11) >= 1 exactly when msat >= ceil(10^11 / price)
        let min_payable = u64::try_from(u128::from(MILLI_SATOSHI_PER_BITCOIN).div_ceil(working_price))
            .map_err(|_| ConvertError::ArithmeticOverflow("min payable exceeds u64"))?;

        let msat_per_unit = one_btc_in_milli_sat()?
            .checked_div(&FixedPoint::from_integer(working_price, 0)?.scale_to(ARITH_SCALE)?)?;

        let units_per_sat = milli_sat_to_units(MilliSatoshi::from_satoshis(1), units_per_btc)?;

        let one_whole_unit = FixedPoint::from_integer(1u64, 0)?;
        let msat_per_whole_unit = units_to_milli_sat(one_whole_unit, units_per_btc)?;

        let shard_count = FixedPoint::from_integer(shards, 0)?.scale_to(ARITH_SCALE)?;
        let max_mpp_rounding_error = msat_per_unit.checked_mul(&shard_count)?.to_u64()?;

        Ok(Self {
            decimal_display: units_per_btc.scale(),
            units_per_btc,
            max_issuable_btc,
            min_payable: MilliSatoshi(min_payable),
            msat_per_unit,
            msat_per_whole_unit,
            units_per_sat,
            shards,
            max_mpp_rounding_error: MilliSatoshi(max_mpp_rounding_error),
        })
    }

    /// Compute limits for every decimal display in `displays`, starting from
    /// the same price.
    pub fn for_displays(
        price: FixedPoint,
        displays: impl IntoIterator<Item = i32>,
        shards: u64,
    ) -> Result<Vec<Self>> {
        displays
            .into_iter()
            .map(|display| Self::compute(price.scale_to(display)?, shards))
            .collect()
    }
}

impl fmt::Display for DecimalDisplayLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "decimal display:            {} (1 BTC = {} units)",
            self.decimal_display,
            self.units_per_btc.value()
        )?;
        writeln!(f, "max issuable units:         can represent {} BTC", self.max_issuable_btc)?;
        writeln!(f, "min payable invoice amount: {}", self.min_payable)?;
        writeln!(
            f,
            "max MPP rounding error:     {} (@{} shards)",
            self.max_mpp_rounding_error, self.shards
        )?;
        writeln!(f, "mSAT per asset unit:        {}", self.msat_per_unit)?;
        writeln!(f, "mSAT per whole asset:       {}", self.msat_per_whole_unit)?;
        write!(f, "asset units per satoshi:    {}", self.units_per_sat)
    }
}
