//! Property-based tests for offline conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sarraf_shared::OfflineUnit;

use super::convert;

/// Strategy to generate positive amounts with cent precision
/// (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to pick any convertible unit.
fn convertible_unit() -> impl Strategy<Value = OfflineUnit> {
    prop::sample::select(OfflineUnit::CONVERTIBLE.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* convertible units A, B and positive amount x,
    /// convert(convert(x, A, B), B, A) SHALL be within 0.01 of x.
    #[test]
    fn prop_round_trip_within_a_cent(
        amount in positive_amount(),
        from in convertible_unit(),
        to in convertible_unit(),
    ) {
        let there = convert(amount, from, to).unwrap();
        let back = convert(there, to, from).unwrap();
        prop_assert!(
            (back - amount).abs() <= dec!(0.01),
            "round trip {} -> {} -> {} drifted: {} vs {}",
            from, to, from, back, amount
        );
    }

    /// *For any* inputs, conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in positive_amount(),
        from in convertible_unit(),
        to in convertible_unit(),
    ) {
        let first = convert(amount, from, to).unwrap();
        let second = convert(amount, from, to).unwrap();
        prop_assert_eq!(first, second);
    }

    /// *For any* positive amount, the result has at most 2 decimal places.
    #[test]
    fn prop_result_has_cent_precision(
        amount in positive_amount(),
        from in convertible_unit(),
        to in convertible_unit(),
    ) {
        let result = convert(amount, from, to).unwrap();
        let scaled = result * Decimal::from(100);
        prop_assert_eq!(
            scaled.round(), scaled,
            "result {} has sub-cent digits", result
        );
    }

    /// *For any* positive amount, converting to the same unit is identity
    /// (up to cent rounding of the input).
    #[test]
    fn prop_same_unit_identity(
        amount in positive_amount(),
        unit in convertible_unit(),
    ) {
        let result = convert(amount, unit, unit).unwrap();
        prop_assert_eq!(result, amount);
    }
}
