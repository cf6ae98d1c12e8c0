//! Property-based tests for rate-table conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;
use sarraf_shared::RateTable;

use super::convert_with_rates;

/// Strategy to generate positive amounts with cent precision.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* table containing the target, converting from MAD is
    /// exactly `amount * rate`.
    #[test]
    fn prop_from_base_is_plain_multiplication(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let mut rates = RateTable::new();
        rates.insert("MAD", Decimal::ONE);
        rates.insert("USD", rate);
        prop_assert_eq!(
            convert_with_rates(amount, "MAD", "USD", &rates),
            amount * rate
        );
    }

    /// *For any* positive rate, MAD -> X -> MAD returns close to the
    /// original amount (division reverses the multiplication).
    #[test]
    fn prop_base_round_trip(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let mut rates = RateTable::new();
        rates.insert("MAD", Decimal::ONE);
        rates.insert("USD", rate);
        let there = convert_with_rates(amount, "MAD", "USD", &rates);
        let back = convert_with_rates(there, "USD", "MAD", &rates);
        let drift = (back - amount).abs();
        prop_assert!(drift < Decimal::new(1, 2), "drifted by {}", drift);
    }

    /// *For any* pair absent from the table, the result is zero.
    #[test]
    fn prop_unknown_codes_convert_to_zero(amount in positive_amount()) {
        let rates = RateTable::new();
        prop_assert_eq!(
            convert_with_rates(amount, "USD", "EUR", &rates),
            Decimal::ZERO
        );
    }
}
