//! Marginal bracket decomposition.
//!
//! This module splits taxable income across an ordered marginal bracket
//! schedule, producing one fill per bracket actually touched.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::BracketFill;

/// Decomposes taxable income across a marginal bracket schedule.
///
/// Brackets are filled in order from the bottom of the schedule. Each fill
/// records the slice of taxable income inside that bracket and the tax owed
/// on it (`amount_filled * rate`, rounded to cents). Brackets that taxable
/// income never reaches produce no fill, so the returned fills partition
/// taxable income exactly:
///
/// * the fill amounts sum to `taxable_income` when the schedule ends with an
///   unbounded bracket (loaded schedules always do)
/// * no fill has a zero amount
/// * fills are ordered exactly as the schedule orders its brackets
///
/// Zero taxable income or an empty schedule yields no fills, which is a
/// valid degenerate result rather than an error.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::decompose_brackets;
/// use tax_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let brackets = vec![
///     TaxBracket {
///         lower: Decimal::ZERO,
///         upper: Some(Decimal::from(10000)),
///         rate: Decimal::from_str("0.10").unwrap(),
///     },
///     TaxBracket {
///         lower: Decimal::from(10000),
///         upper: None,
///         rate: Decimal::from_str("0.20").unwrap(),
///     },
/// ];
///
/// let fills = decompose_brackets(Decimal::from(15000), &brackets);
/// assert_eq!(fills.len(), 2);
/// assert_eq!(fills[0].amount_filled, Decimal::from(10000));
/// assert_eq!(fills[1].amount_filled, Decimal::from(5000));
/// ```
pub fn decompose_brackets(taxable_income: Decimal, brackets: &[TaxBracket]) -> Vec<BracketFill> {
    let mut fills = Vec::new();

    for bracket in brackets {
        if taxable_income <= bracket.lower {
            break;
        }

        let reach = match bracket.upper {
            Some(upper) => taxable_income.min(upper),
            None => taxable_income,
        };
        let amount_filled = reach - bracket.lower;
        if amount_filled <= Decimal::ZERO {
            continue;
        }

        fills.push(BracketFill {
            rate: bracket.rate,
            lower: bracket.lower,
            upper: bracket.upper,
            amount_filled,
            tax_owed: (amount_filled * bracket.rate).round_dp(2),
        });
    }

    fills
}
