//! Conversion between international currencies using a MAD-based table.

use rust_decimal::Decimal;
use sarraf_shared::RateTable;

/// True for the codes that denote the table's base currency.
fn is_base(code: &str) -> bool {
    code.eq_ignore_ascii_case("MAD") || code.eq_ignore_ascii_case("dirham")
}

/// Converts an amount between two currencies quoted in a MAD-based table.
///
/// Cross-pairs route through MAD: `(amount / rate[from]) * rate[to]`.
/// The result is NOT rounded; rounding to display precision is
/// [`crate::format`]'s job.
///
/// A missing rate converts to zero rather than erroring. That is a
/// deliberate policy inherited from the interactive tool this engine
/// backs: it must always render *something*, and the rate feed's `source`
/// tag already tells callers how trustworthy the table is.
#[must_use]
pub fn convert_with_rates(amount: Decimal, from: &str, to: &str, rates: &RateTable) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if is_base(from) {
        return match rates.get(to) {
            Some(rate) => amount * rate,
            None => Decimal::ZERO,
        };
    }

    if is_base(to) {
        return match rates.get(from) {
            Some(rate) if !rate.is_zero() => amount / rate,
            _ => Decimal::ZERO,
        };
    }

    match (rates.get(from), rates.get(to)) {
        (Some(from_rate), Some(to_rate)) if !from_rate.is_zero() => {
            amount / from_rate * to_rate
        }
        _ => Decimal::ZERO,
    }
}
