//! Shared rounding helper.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to 2 decimal places, half away from zero.
///
/// This is the rounding the whole engine uses at cent boundaries. Note this
/// is deliberately NOT banker's rounding: display amounts follow the
/// everyday `round(x * 100) / 100` convention.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_to_two_places() {
        assert_eq!(round2(dec!(1.234)), dec!(1.23));
        assert_eq!(round2(dec!(1.236)), dec!(1.24));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 2.5 cents -> 3 cents, unlike banker's rounding
        assert_eq!(round2(dec!(0.025)), dec!(0.03));
        assert_eq!(round2(dec!(0.035)), dec!(0.04));
    }

    #[test]
    fn test_integers_untouched() {
        assert_eq!(round2(dec!(100)), dec!(100));
        assert_eq!(round2(dec!(0)), dec!(0));
    }
}
