//! Integration tests for payment <-> asset unit conversion.
//!
//! These tests verify:
//! 1. Known quotes convert to the exact expected amounts
//! 2. Cross-rates through BTC between two assets
//! 3. Round trips stay within the documented truncation bound
//! 4. Properties hold over seeded random inputs
//!
//! ## Running
//!
//! ```bash
//! cargo test --test conversion
//! ```

use rfq_math::{
    milli_sat_to_units, milli_sat_to_units_fixed, units_to_milli_sat, ConvertError, FixedPoint,
    MilliSatoshi, ARITH_SCALE,
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Iterations per property test
const PROPERTY_ITERATIONS: usize = 10_000;

/// Smallest raw price (units per BTC) at which one asset unit is worth at
/// most two milli-satoshi
const MIN_SUPPORTED_RAW_PRICE: u128 = 50_000_000_000;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn fixed(value: u128, scale: i32) -> FixedPoint {
    FixedPoint::from_integer(value, scale).unwrap()
}

/// Price given at `scale`, rescaled to the asset's decimal display.
fn price(value: u64, scale: i32, display: i32) -> FixedPoint {
    fixed(u128::from(value), scale).scale_to(display).unwrap()
}

/// Convert `amount` whole units of one asset into whole units of another,
/// going through a Lightning payment.
fn cross_convert(amount: u64, from_price: FixedPoint, to_price: FixedPoint) -> u64 {
    let msat = units_to_milli_sat(fixed(u128::from(amount), 0), from_price).unwrap();
    milli_sat_to_units_fixed(msat, to_price)
        .unwrap()
        .to_u64()
        .unwrap()
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn usd_5k_at_display_6() {
    let price = price(5_000_00, 2, 6);
    assert_eq!(price.value(), 5_000_000_000);
    assert_eq!(milli_sat_to_units(MilliSatoshi(200_000), price).unwrap(), 10_000);
}

#[test]
fn usd_50k_at_display_6() {
    let price = price(50_702_12, 2, 6);
    assert_eq!(milli_sat_to_units(MilliSatoshi(1_973), price).unwrap(), 1_000);
}

#[test]
fn jpy_quotes() {
    assert_eq!(
        milli_sat_to_units(MilliSatoshi(5_000), price(7_341_847, 0, 6)).unwrap(),
        367_092
    );
    assert_eq!(
        milli_sat_to_units(MilliSatoshi(5_000), price(7_341_847, 0, 4)).unwrap(),
        3_670
    );
}

#[test]
fn usd_to_jpy_cross_rates() {
    let cases = [
        // (usd price cents, jpy price, usd amount, expected jpy)
        (20_000_00, 2_840_000, 1, 142),
        (50_702_12, 7_341_847, 100, 14_480),
        (1_000_000_00, 142_000_000, 500, 71_000),
    ];

    for (usd_cents, jpy, usd_amount, expected) in cases {
        let usd_price = price(usd_cents, 2, 6);
        let jpy_price = price(jpy, 0, 4);
        assert_eq!(
            cross_convert(usd_amount, usd_price, jpy_price),
            expected,
            "{usd_amount} USD @ {usd_price} -> JPY @ {jpy_price}"
        );
    }
}

#[test]
fn zero_price_fails_for_any_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..100 {
        let msat = rng.gen::<u64>();
        let scale = rng.gen_range(0..=ARITH_SCALE);
        assert_eq!(
            milli_sat_to_units(MilliSatoshi(msat), fixed(0, scale)),
            Err(ConvertError::DivisionByZero)
        );
    }
}

#[test]
fn negative_display_is_rejected() {
    assert_eq!(
        fixed(5_000_00, 2).scale_to(-2),
        Err(ConvertError::InvalidScale(-2))
    );
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

/// Rescaling up then back down loses nothing.
#[test]
fn property_rescale_up_is_invertible() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..PROPERTY_ITERATIONS {
        let value = u128::from(rng.gen::<u64>());
        let s1 = rng.gen_range(0..=20);
        let s2 = rng.gen_range(s1..=s1 + 18);

        let original = fixed(value, s1);
        let back = original.scale_to(s2).unwrap().scale_to(s1).unwrap();
        assert_eq!(back, original, "value={value}, {s1} -> {s2} -> {s1}");
    }
}

/// Payment -> units -> payment never grows and loses at most 2 msat.
#[test]
fn property_round_trip_error_is_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(1337);

    for _ in 0..PROPERTY_ITERATIONS {
        let display = rng.gen_range(2..=8);
        let raw_price = rng.gen_range(MIN_SUPPORTED_RAW_PRICE..=10u128.pow(16));
        let price = fixed(raw_price, display);
        let msat = rng.gen_range(0..=1_000_000_000_000u64);

        let units = milli_sat_to_units(MilliSatoshi(msat), price).unwrap();
        let recovered = units_to_milli_sat(fixed(u128::from(units), display), price).unwrap();

        assert!(recovered.0 <= msat, "msat={msat}, price={price}, recovered={recovered}");
        assert!(
            recovered.abs_diff(MilliSatoshi(msat)) <= 2,
            "msat={msat}, price={price}, recovered={recovered}"
        );
    }
}

/// More payment never buys fewer units.
#[test]
fn property_conversion_is_monotonic() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..100 {
        let display = rng.gen_range(0..=ARITH_SCALE);
        let price = fixed(rng.gen_range(1..=10u128.pow(18)), display);

        let mut amounts: Vec<u64> = (0..100)
            .map(|_| rng.gen_range(0..=1_000_000_000_000_000))
            .collect();
        amounts.sort_unstable();

        let units: Vec<u128> = amounts
            .iter()
            .map(|&msat| {
                milli_sat_to_units_fixed(MilliSatoshi(msat), price)
                    .unwrap()
                    .value()
            })
            .collect();

        assert!(
            units.windows(2).all(|pair| pair[0] <= pair[1]),
            "price={price}"
        );
    }
}

/// Same inputs, same output: both peers of a quote agree.
#[test]
fn property_conversion_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..1_000 {
        let price = fixed(rng.gen_range(1..=10u128.pow(16)), rng.gen_range(0..=8));
        let msat = MilliSatoshi(rng.gen_range(0..=1_000_000_000_000));

        assert_eq!(
            milli_sat_to_units_fixed(msat, price),
            milli_sat_to_units_fixed(msat, price)
        );
    }
}
