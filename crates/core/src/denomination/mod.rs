//! Banknote/coin breakdown of dirham amounts.
//!
//! The catalog mirrors the denominations in circulation; its descending
//! face-value order is what makes the greedy breakdown correct, so the
//! order is part of the contract, not a presentation choice.

mod breakdown;
mod catalog;
#[cfg(test)]
mod props;

pub use breakdown::{DenominationCount, breakdown};
pub use catalog::{CATALOG, Denomination, DenominationKind};
