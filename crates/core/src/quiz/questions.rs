//! The fixed question bank.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sarraf_shared::OfflineUnit;
use serde::Serialize;

use crate::offline::convert;

/// One multiple-choice conversion question.
///
/// `key` is a stable identifier the host resolves to a localized prompt;
/// the engine never renders text itself. The expected answer is computed
/// through [`crate::offline::convert`], so the bank can never disagree
/// with the converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Stable prompt identifier, e.g. `"5000francs"`.
    pub key: &'static str,
    /// Stage this question belongs to (1-4).
    pub stage: u8,
    /// Amount to convert.
    pub amount: Decimal,
    /// Source unit.
    pub from: OfflineUnit,
    /// Target unit.
    pub to: OfflineUnit,
    /// The correct answer, in the target unit.
    pub answer: Decimal,
    /// The four choices offered, exactly one of which is correct.
    pub options: [Decimal; 4],
    /// Label for the answer's unit, e.g. `"DH"` or `"centimes"`.
    pub answer_unit: &'static str,
}

#[allow(clippy::too_many_arguments)]
fn q(
    stage: u8,
    key: &'static str,
    amount: Decimal,
    from: OfflineUnit,
    to: OfflineUnit,
    options: [Decimal; 4],
    answer_unit: &'static str,
) -> Option<Question> {
    // Bank entries only use convertible units; a non-convertible entry
    // would be a bug and is dropped (the bank-size test catches it).
    let answer = convert(amount, from, to).ok()?;
    Some(Question {
        key,
        stage,
        amount,
        from,
        to,
        answer,
        options,
        answer_unit,
    })
}

/// Builds the full 20-question bank: 4 stages of 5 questions, easiest
/// first.
#[must_use]
#[rustfmt::skip]
pub fn question_bank() -> Vec<Question> {
    use OfflineUnit::{Centime, Dirham, Franc, Ryal};

    [
        // Stage 1: basic conversions
        q(1, "5000francs", dec!(5000), Franc, Dirham, [dec!(5), dec!(50), dec!(500), dec!(5000)], "DH"),
        q(1, "20ryals", dec!(20), Ryal, Dirham, [dec!(0.1), dec!(1), dec!(10), dec!(100)], "DH"),
        q(1, "250centimes", dec!(250), Centime, Dirham, [dec!(2.5), dec!(25), dec!(250), dec!(2500)], "DH"),
        q(1, "100dh", dec!(100), Dirham, Centime, [dec!(100), dec!(1000), dec!(10000), dec!(100_000)], "centimes"),
        q(1, "50francs", dec!(50), Franc, Dirham, [dec!(0.5), dec!(5), dec!(50), dec!(500)], "DH"),
        // Stage 2: intermediate conversions
        q(2, "1000centimes", dec!(1000), Centime, Dirham, [dec!(1), dec!(10), dec!(100), dec!(1000)], "DH"),
        q(2, "40ryals", dec!(40), Ryal, Dirham, [dec!(0.2), dec!(2), dec!(20), dec!(200)], "DH"),
        q(2, "5dh", dec!(5), Dirham, Centime, [dec!(5), dec!(50), dec!(500), dec!(5000)], "centimes"),
        q(2, "200francs", dec!(200), Franc, Dirham, [dec!(2), dec!(20), dec!(200), dec!(2000)], "DH"),
        q(2, "15dh", dec!(15), Dirham, Ryal, [dec!(3), dec!(30), dec!(300), dec!(3000)], "ryals"),
        // Stage 3: advanced conversions
        q(3, "500ryals", dec!(500), Ryal, Dirham, [dec!(2.5), dec!(25), dec!(250), dec!(2500)], "DH"),
        q(3, "75dh", dec!(75), Dirham, Franc, [dec!(7.5), dec!(75), dec!(750), dec!(7500)], "francs"),
        q(3, "1500centimes", dec!(1500), Centime, Dirham, [dec!(1.5), dec!(15), dec!(150), dec!(1500)], "DH"),
        q(3, "30dh", dec!(30), Dirham, Ryal, [dec!(6), dec!(60), dec!(600), dec!(6000)], "ryals"),
        q(3, "800francs", dec!(800), Franc, Dirham, [dec!(8), dec!(80), dec!(800), dec!(8000)], "DH"),
        // Stage 4: expert conversions
        q(4, "1200ryals", dec!(1200), Ryal, Dirham, [dec!(6), dec!(60), dec!(600), dec!(6000)], "DH"),
        q(4, "45dh", dec!(45), Dirham, Centime, [dec!(4.5), dec!(45), dec!(450), dec!(4500)], "centimes"),
        q(4, "2000francs", dec!(2000), Franc, Dirham, [dec!(20), dec!(200), dec!(2000), dec!(20000)], "DH"),
        q(4, "90dh", dec!(90), Dirham, Ryal, [dec!(18), dec!(180), dec!(1800), dec!(18000)], "ryals"),
        q(4, "3500centimes", dec!(3500), Centime, Dirham, [dec!(3.5), dec!(35), dec!(350), dec!(3500)], "DH"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
