//! Core value types for rfq-math.
//!
//! ## Types
//!
//! - [`FixedPoint`]: unsigned decimal stored as `value / 10^scale`
//! - [`MilliSatoshi`]: Lightning payment amount
//!
//! ## Fixed-Point Arithmetic
//!
//! No value in this crate passes through a float. Prices and asset amounts
//! are `FixedPoint`s; payment amounts are integer milli-satoshi.

mod amount;
mod fixed_point;

pub use amount::{
    MilliSatoshi, MILLI_SATOSHI_PER_BITCOIN, MILLI_SATOSHI_PER_SATOSHI, SATOSHI_PER_BITCOIN,
};
pub use fixed_point::{FixedPoint, MAX_SCALE};
