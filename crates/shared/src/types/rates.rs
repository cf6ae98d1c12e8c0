//! MAD-based exchange rate table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rates relative to the Moroccan dirham.
///
/// Each entry reads "1 MAD = rate units of the keyed currency". A table
/// produced by the rate feed always contains `MAD -> 1`; cross-currency
/// pairs are derived by routing through MAD. Keys are open-ended code
/// strings because live feeds quote far more currencies than the UI lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the MAD rate for a currency code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Returns true if the table has an entry for `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    /// Adds or replaces a rate.
    pub fn insert(&mut self, code: impl Into<String>, rate: Decimal) {
        self.rates.insert(code.into(), rate);
    }

    /// Number of quoted currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no currencies are quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(code, rate)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl FromIterator<(String, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, Decimal); N]> for RateTable {
    fn from(entries: [(&str, Decimal); N]) -> Self {
        entries
            .into_iter()
            .map(|(code, rate)| (code.to_string(), rate))
            .collect()
    }
}
