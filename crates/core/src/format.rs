//! Display formatting for amounts.

use rust_decimal::Decimal;

use crate::round::round2;

/// Formats an amount for display with 2 decimals and the unit's symbol.
///
/// Symbol placement follows local convention: the dirham symbol trails
/// (`12.00 DH`), western symbols lead (`$12.00`), and the Moroccan
/// sub-units show a bare number (their name is already on screen next to
/// the field). Unknown codes fall back to `"{amount} {code}"`. No locale
/// grouping; hosts add it if they need it.
#[must_use]
pub fn format_amount(amount: Decimal, code: &str) -> String {
    let amount = round2(amount);
    match code {
        "MAD" | "dirham" => format!("{amount:.2} DH"),
        "USD" => format!("${amount:.2}"),
        "EUR" => format!("€{amount:.2}"),
        "GBP" => format!("£{amount:.2}"),
        "CAD" => format!("C${amount:.2}"),
        "centime" | "franc" | "ryal" => format!("{amount:.2}"),
        _ => format!("{amount:.2} {code}"),
    }
}
