//! Property-based tests for the denomination breakdown.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::breakdown;

/// Strategy to generate amounts with cent precision (0.01 to 100,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts that are multiples of the smallest coin.
fn decime_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount, the handed-out total never exceeds the amount.
    #[test]
    fn prop_total_never_exceeds_amount(amount in cent_amount()) {
        let lines = breakdown(amount);
        let total: Decimal = lines.iter().map(|l| l.subtotal).sum();
        prop_assert!(total <= amount, "handed out {} for {}", total, amount);
    }

    /// *For any* multiple of 0.1, the residual is below the smallest coin.
    #[test]
    fn prop_decime_amounts_leave_no_coin_behind(amount in decime_amount()) {
        let lines = breakdown(amount);
        let total: Decimal = lines.iter().map(|l| l.subtotal).sum();
        prop_assert!(
            amount - total < dec!(0.1),
            "residual {} >= smallest coin for {}",
            amount - total, amount
        );
    }

    /// *For any* amount, every emitted line has a positive count and a
    /// consistent subtotal.
    #[test]
    fn prop_lines_are_consistent(amount in cent_amount()) {
        for line in breakdown(amount) {
            prop_assert!(line.count > 0);
            prop_assert_eq!(
                line.subtotal,
                Decimal::from(line.count) * line.denomination.face_value
            );
        }
    }

    /// *For any* amount, denominations appear in strictly descending order.
    #[test]
    fn prop_lines_descend(amount in cent_amount()) {
        let lines = breakdown(amount);
        for pair in lines.windows(2) {
            prop_assert!(
                pair[0].denomination.face_value > pair[1].denomination.face_value
            );
        }
    }
}
