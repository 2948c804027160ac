//! # rfq-math
//!
//! Fixed-point conversion between Lightning payments and issued-asset units.
//!
//! ## Architecture
//!
//! - **Types**: [`FixedPoint`] decimal values and [`MilliSatoshi`] amounts
//! - **RFQ**: payment/asset conversion at a negotiated price, and the limits
//!   a decimal display imposes
//!
//! ## Design Principles
//!
//! 1. **Determinism**: both peers of a quote compute the same integer
//! 2. **No Floating Point**: scaled-integer math, 256-bit intermediates
//! 3. **Truncation Only**: lossy steps round toward zero, never up
//! 4. **Loud Failure**: overflow and zero prices are errors, never wraps
//!
//! ## Example
//!
//! ```
//! use rfq_math::{milli_sat_to_units, FixedPoint, MilliSatoshi};
//!
//! // 20,000.00 USD per BTC at decimal display 6
//! let price: FixedPoint = "20000.00".parse().unwrap();
//! let price = price.scale_to(6).unwrap();
//!
//! assert_eq!(milli_sat_to_units(MilliSatoshi(5_000_000), price).unwrap(), 1_000_000);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error type shared by every fallible operation
pub mod error;

/// Core value types: FixedPoint, MilliSatoshi
pub mod types;

/// Quote conversion: payment <-> asset units
pub mod rfq;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{ConvertError, Result};
pub use rfq::{
    milli_sat_to_units, milli_sat_to_units_fixed, units_to_milli_sat, DecimalDisplayLimits,
    ARITH_SCALE,
};
pub use types::{FixedPoint, MilliSatoshi};
