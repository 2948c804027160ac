//! Request-for-quote price conversion.
//!
//! ## Overview
//!
//! Two peers negotiating a quote agree on a price in asset units per BTC.
//! One side then needs the exact milli-satoshi amount to pay for a number
//! of asset units, the other the exact number of units a payment buys.
//! Both must reach the same integer, so every step here is deterministic
//! integer arithmetic on [`FixedPoint`](crate::types::FixedPoint) values.
//!
//! ## Components
//!
//! - [`milli_sat_to_units`] / [`units_to_milli_sat`]: the two conversion
//!   directions, at [`ARITH_SCALE`] working precision
//! - [`DecimalDisplayLimits`]: what a given decimal display can and cannot
//!   express at a given price
//!
//! ## Rounding Error
//!
//! Converting a payment to units and back never returns more than the
//! original payment. A payment split into `n` shards can lose up to `n`
//! truncation steps in total; [`DecimalDisplayLimits::max_mpp_rounding_error`]
//! reports that bound.

pub mod convert;
pub mod limits;

pub use convert::{milli_sat_to_units, milli_sat_to_units_fixed, units_to_milli_sat, ARITH_SCALE};
pub use limits::DecimalDisplayLimits;
