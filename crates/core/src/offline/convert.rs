//! Offline conversion through the dirham base.

use rust_decimal::Decimal;
use sarraf_shared::OfflineUnit;

use super::error::OfflineError;
use crate::round::round2;

/// Converts an amount between historical Moroccan units.
///
/// The amount is first expressed in dirhams (`amount * rate(from)`), then
/// in the target unit (`/ rate(to)`), and finally rounded to 2 decimal
/// places, half away from zero.
///
/// Non-positive amounts convert to zero rather than erroring: there is
/// nothing to convert, and interactive callers feed this raw input.
///
/// # Errors
///
/// Returns [`OfflineError::UnsupportedUnit`] if either unit has no defined
/// rate. This is a hard precondition; guessing a rate for the display-only
/// historical units would silently corrupt the result.
pub fn convert(
    amount: Decimal,
    from: OfflineUnit,
    to: OfflineUnit,
) -> Result<Decimal, OfflineError> {
    let from_rate = from.rate().ok_or(OfflineError::UnsupportedUnit(from))?;
    let to_rate = to.rate().ok_or(OfflineError::UnsupportedUnit(to))?;

    if amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let dirhams = amount * from_rate;
    Ok(round2(dirhams / to_rate))
}
