//! The fixed catalog of Moroccan banknotes and coins.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Whether a denomination is a banknote or a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenominationKind {
    /// Paper banknote.
    Bill,
    /// Metal coin.
    Coin,
}

impl std::fmt::Display for DenominationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bill => write!(f, "bill"),
            Self::Coin => write!(f, "coin"),
        }
    }
}

/// A single banknote or coin denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Bill or coin.
    pub kind: DenominationKind,
    /// Face value in dirhams.
    pub face_value: Decimal,
}

impl Denomination {
    const fn bill(face_value: Decimal) -> Self {
        Self {
            kind: DenominationKind::Bill,
            face_value,
        }
    }

    const fn coin(face_value: Decimal) -> Self {
        Self {
            kind: DenominationKind::Coin,
            face_value,
        }
    }
}

/// Every denomination in circulation, ordered by face value descending.
///
/// The breakdown algorithm walks this in order; do not reorder.
pub const CATALOG: [Denomination; 12] = [
    Denomination::bill(dec!(200)),
    Denomination::bill(dec!(100)),
    Denomination::bill(dec!(50)),
    Denomination::bill(dec!(25)),
    Denomination::bill(dec!(20)),
    Denomination::coin(dec!(10)),
    Denomination::coin(dec!(5)),
    Denomination::coin(dec!(2)),
    Denomination::coin(dec!(1)),
    Denomination::coin(dec!(0.5)),
    Denomination::coin(dec!(0.2)),
    Denomination::coin(dec!(0.1)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_strictly_descending() {
        for pair in CATALOG.windows(2) {
            assert!(
                pair[0].face_value > pair[1].face_value,
                "{} must come before {}",
                pair[0].face_value,
                pair[1].face_value
            );
        }
    }

    #[test]
    fn test_catalog_split() {
        let bills = CATALOG
            .iter()
            .filter(|d| d.kind == DenominationKind::Bill)
            .count();
        let coins = CATALOG
            .iter()
            .filter(|d| d.kind == DenominationKind::Coin)
            .count();
        assert_eq!(bills, 5);
        assert_eq!(coins, 7);
    }

    #[test]
    fn test_smallest_is_ten_centimes() {
        assert_eq!(CATALOG[CATALOG.len() - 1].face_value, dec!(0.1));
    }
}
