//! Greedy decomposition of a dirham amount into bills and coins.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::catalog::{CATALOG, Denomination};
use crate::round::round2;

/// One line of a breakdown: how many of a denomination and their subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationCount {
    /// The denomination being counted.
    pub denomination: Denomination,
    /// How many of it.
    pub count: u32,
    /// `count * face_value`.
    pub subtotal: Decimal,
}

/// Breaks a dirham amount into bills and coins, largest first.
///
/// Greedy over [`CATALOG`]: at each denomination take as many whole units as
/// fit, then continue with the remainder (re-rounded to cents each step so
/// decimal dust never invents or loses a coin). The Moroccan denomination
/// set is canonical, so for amounts that are multiples of 0.1 the greedy
/// pick is also the optimal one and the residual is below the smallest coin.
///
/// Non-positive amounts yield an empty breakdown.
#[must_use]
pub fn breakdown(amount: Decimal) -> Vec<DenominationCount> {
    if amount <= Decimal::ZERO {
        return Vec::new();
    }

    let mut remaining = round2(amount);
    let mut lines = Vec::new();

    for denomination in CATALOG {
        let whole = (remaining / denomination.face_value).floor();
        if whole > Decimal::ZERO {
            let subtotal = whole * denomination.face_value;
            // saturates only past 4 billion notes of one denomination
            let count = whole.to_u32().unwrap_or(u32::MAX);
            lines.push(DenominationCount {
                denomination,
                count,
                subtotal,
            });
            remaining = round2(remaining - subtotal);
        }
    }

    lines
}
