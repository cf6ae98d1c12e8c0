//! Unit catalogs consumed by pickers.

use sarraf_shared::{Currency, OfflineUnit};
use serde::Serialize;

/// A unit as shown in a picker: its code plus display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitInfo {
    /// Stable code string (`"dirham"`, `"USD"`, ...).
    pub code: String,
    /// Display symbol (`"DH"`, `"$"`, ...).
    pub symbol: &'static str,
}

/// The two unit domains offered by the converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitCatalog {
    /// Historical Moroccan units (offline conversion).
    pub moroccan: Vec<UnitInfo>,
    /// International currencies (live-rate conversion).
    pub international: Vec<UnitInfo>,
}

/// Returns true if the code belongs to the offline conversion domain.
///
/// `MAD` counts as offline: it is the dirham under its ISO name, so a
/// MAD-to-dirham conversion needs no rate table.
#[must_use]
pub fn is_offline_unit(code: &str) -> bool {
    if code.eq_ignore_ascii_case("MAD") {
        return true;
    }
    code.parse::<OfflineUnit>()
        .is_ok_and(OfflineUnit::is_convertible)
}

/// Enumerates every unit the converter offers.
///
/// The Moroccan list carries only the convertible units; the display-only
/// historical ones are reference material, not conversion choices.
#[must_use]
pub fn available_units() -> UnitCatalog {
    let moroccan = [
        OfflineUnit::Dirham,
        OfflineUnit::Ryal,
        OfflineUnit::Centime,
        OfflineUnit::Franc,
    ]
    .into_iter()
    .map(|unit| UnitInfo {
        code: unit.to_string(),
        symbol: unit.symbol(),
    })
    .collect();

    let international = Currency::ALL
        .into_iter()
        .map(|currency| UnitInfo {
            code: currency.to_string(),
            symbol: currency.symbol(),
        })
        .collect();

    UnitCatalog {
        moroccan,
        international,
    }
}
