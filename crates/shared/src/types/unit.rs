//! Currency unit enums for the offline and international domains.
//!
//! The two domains are disjoint on purpose: [`OfflineUnit`] covers the
//! historical Moroccan units that convert through a fixed table with no I/O,
//! while [`Currency`] covers the international codes that require a live
//! MAD-based rate table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Historical Moroccan currency units.
///
/// Only `Dirham`, `Centime`, `Franc` and `Ryal` carry a conversion rate.
/// The remaining variants are older units that still appear in everyday
/// speech and in the UI, but have no defined rate; conversions involving
/// them are rejected rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfflineUnit {
    /// Moroccan dirham, the base unit (1 DH).
    Dirham,
    /// Centime, 1/100 of a dirham.
    Centime,
    /// Franc, colloquial alias for the centime (same rate).
    Franc,
    /// Ryal, 1/20 of a dirham.
    Ryal,
    /// Dourou, display-only historical unit.
    Dourou,
    /// Benduqui, display-only historical unit.
    Benduqui,
    /// Mouzouna, display-only historical unit.
    Mouzouna,
    /// Falous, display-only historical unit.
    Falous,
    /// Qharrouba, display-only historical unit.
    Qharrouba,
    /// Ouqiya, display-only historical unit.
    Ouqiya,
}

impl OfflineUnit {
    /// All units that can be converted through the fixed rate table.
    pub const CONVERTIBLE: [Self; 4] = [Self::Dirham, Self::Centime, Self::Franc, Self::Ryal];

    /// Value of one unit expressed in dirhams, or `None` for the
    /// display-only historical units.
    #[must_use]
    pub fn rate(self) -> Option<Decimal> {
        match self {
            Self::Dirham => Some(Decimal::ONE),
            // Franc and centime share the identical rate; this equivalence
            // is relied upon by callers, not a coincidence.
            Self::Centime | Self::Franc => Some(Decimal::new(1, 2)),
            Self::Ryal => Some(Decimal::new(5, 2)),
            Self::Dourou
            | Self::Benduqui
            | Self::Mouzouna
            | Self::Falous
            | Self::Qharrouba
            | Self::Ouqiya => None,
        }
    }

    /// Returns true if this unit has a defined conversion rate.
    #[must_use]
    pub fn is_convertible(self) -> bool {
        self.rate().is_some()
    }

    /// Short display symbol for the convertible units.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Dirham => "DH",
            Self::Centime => "c",
            Self::Franc => "f",
            Self::Ryal => "r",
            Self::Dourou => "dourou",
            Self::Benduqui => "benduqui",
            Self::Mouzouna => "mouzouna",
            Self::Falous => "falous",
            Self::Qharrouba => "qharrouba",
            Self::Ouqiya => "ouqiya",
        }
    }
}

impl std::fmt::Display for OfflineUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dirham => "dirham",
            Self::Centime => "centime",
            Self::Franc => "franc",
            Self::Ryal => "ryal",
            Self::Dourou => "dourou",
            Self::Benduqui => "benduqui",
            Self::Mouzouna => "mouzouna",
            Self::Falous => "falous",
            Self::Qharrouba => "qharrouba",
            Self::Ouqiya => "ouqiya",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OfflineUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dirham" => Ok(Self::Dirham),
            "centime" => Ok(Self::Centime),
            "franc" => Ok(Self::Franc),
            "ryal" => Ok(Self::Ryal),
            "dourou" => Ok(Self::Dourou),
            "benduqui" => Ok(Self::Benduqui),
            "mouzouna" => Ok(Self::Mouzouna),
            "falous" => Ok(Self::Falous),
            "qharrouba" => Ok(Self::Qharrouba),
            "ouqiya" => Ok(Self::Ouqiya),
            _ => Err(format!("Unknown Moroccan unit: {s}")),
        }
    }
}

/// International currency codes supported by the converter UI.
///
/// Live rate tables carry many more codes than these; this enum only
/// enumerates the currencies the application offers in pickers and knows a
/// display symbol for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Moroccan Dirham
    Mad,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Canadian Dollar
    Cad,
    /// Australian Dollar
    Aud,
    /// Swiss Franc
    Chf,
    /// Chinese Yuan
    Cny,
    /// Saudi Riyal
    Sar,
    /// UAE Dirham
    Aed,
}

impl Currency {
    /// Every supported international currency, MAD first.
    pub const ALL: [Self; 11] = [
        Self::Mad,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Cad,
        Self::Aud,
        Self::Chf,
        Self::Cny,
        Self::Sar,
        Self::Aed,
    ];

    /// Display symbol shown next to amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mad => "DH",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy | Self::Cny => "¥",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Chf => "CHF",
            Self::Sar => "SR",
            Self::Aed => "AED",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Mad => "MAD",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Sar => "SAR",
            Self::Aed => "AED",
        };
        write!(f, "{code}")
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAD" => Ok(Self::Mad),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            "CHF" => Ok(Self::Chf),
            "CNY" => Ok(Self::Cny),
            "SAR" => Ok(Self::Sar),
            "AED" => Ok(Self::Aed),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_offline_rates() {
        assert_eq!(OfflineUnit::Dirham.rate(), Some(dec!(1)));
        assert_eq!(OfflineUnit::Centime.rate(), Some(dec!(0.01)));
        assert_eq!(OfflineUnit::Franc.rate(), Some(dec!(0.01)));
        assert_eq!(OfflineUnit::Ryal.rate(), Some(dec!(0.05)));
    }

    #[test]
    fn test_franc_centime_equivalence() {
        assert_eq!(OfflineUnit::Franc.rate(), OfflineUnit::Centime.rate());
    }

    #[test]
    fn test_display_only_units_have_no_rate() {
        for unit in [
            OfflineUnit::Dourou,
            OfflineUnit::Benduqui,
            OfflineUnit::Mouzouna,
            OfflineUnit::Falous,
            OfflineUnit::Qharrouba,
            OfflineUnit::Ouqiya,
        ] {
            assert_eq!(unit.rate(), None);
            assert!(!unit.is_convertible());
        }
    }

    #[test]
    fn test_convertible_list() {
        for unit in OfflineUnit::CONVERTIBLE {
            assert!(unit.is_convertible());
        }
    }

    #[test]
    fn test_offline_unit_round_trip() {
        for unit in [
            OfflineUnit::Dirham,
            OfflineUnit::Centime,
            OfflineUnit::Franc,
            OfflineUnit::Ryal,
            OfflineUnit::Dourou,
            OfflineUnit::Ouqiya,
        ] {
            assert_eq!(OfflineUnit::from_str(&unit.to_string()).unwrap(), unit);
        }
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Mad.to_string(), "MAD");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Aed.to_string(), "AED");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("MAD").unwrap(), Currency::Mad);
        assert_eq!(Currency::from_str("mad").unwrap(), Currency::Mad);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert_eq!(Currency::from_str("sar").unwrap(), Currency::Sar);

        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::Mad.symbol(), "DH");
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Gbp.symbol(), "£");
        assert_eq!(Currency::Cad.symbol(), "C$");
    }

    #[test]
    fn test_currency_all_starts_with_mad() {
        assert_eq!(Currency::ALL[0], Currency::Mad);
        assert_eq!(Currency::ALL.len(), 11);
    }
}
