//! Computation result models for the Progressive Tax Engine.
//!
//! This module contains the [`TaxComputation`] type and its associated
//! structures that capture all outputs from a tax calculation: the deduction
//! breakdown, the bracket-by-bracket fills, and the totals with the flat-tax
//! comparison.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FilingProfile;

/// The deduction and exemption breakdown for a profile.
///
/// Derived deterministically from the profile and the rules data.
/// `taxable_income` is `max(0, gross_income - total_shield)` and is never
/// negative.
///
/// # Example
///
/// ```
/// use tax_engine::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionResult {
///     standard_deduction: Decimal::from(12400),
///     personal_exemption_per_person: Decimal::ZERO,
///     dependent_rate: Decimal::ZERO,
///     exemption_note: String::new(),
///     total_exemptions: Decimal::ZERO,
///     total_shield: Decimal::from(12400),
///     taxable_income: Decimal::from(47600),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The standard deduction for the year and filing status.
    pub standard_deduction: Decimal,
    /// The personal exemption amount for the filer (zero outside 1913-2017).
    pub personal_exemption_per_person: Decimal,
    /// The exemption amount allowed per dependent.
    pub dependent_rate: Decimal,
    /// Explanatory note attached to the exemption rules for the year.
    pub exemption_note: String,
    /// Filer exemption plus dependent rate times dependent count.
    pub total_exemptions: Decimal,
    /// Standard deduction plus total exemptions.
    pub total_shield: Decimal,
    /// Gross income minus the shield, floored at zero.
    pub taxable_income: Decimal,
}

/// The portion of taxable income falling inside one bracket.
///
/// One fill is produced per bracket actually touched by taxable income,
/// ordered ascending by rate. Untouched brackets produce no fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketFill {
    /// The marginal rate for this bracket, as a fraction.
    pub rate: Decimal,
    /// The lower bound of the bracket.
    pub lower: Decimal,
    /// The upper bound of the bracket; `None` for the unbounded top bracket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<Decimal>,
    /// The amount of taxable income that fell into this bracket.
    pub amount_filled: Decimal,
    /// The tax owed on this bracket (amount_filled * rate).
    pub tax_owed: Decimal,
}

/// Aggregated totals for a tax calculation.
///
/// Includes the flat-tax comparison: `flat_difference` is positive when the
/// 20% flat tax would cost more than the progressive system for this
/// profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    /// The total progressive tax (sum of all bracket fills).
    pub total_progressive_tax: Decimal,
    /// Progressive tax as a percentage of gross income (0 when gross is 0).
    pub effective_rate: Decimal,
    /// The 20% flat-tax alternative amount.
    pub flat_tax_amount: Decimal,
    /// The flat effective rate, always exactly 20.00.
    pub flat_effective_rate: Decimal,
    /// Flat tax minus progressive tax; positive means flat costs more.
    pub flat_difference: Decimal,
}

/// The complete result of a tax calculation.
///
/// This struct captures all outputs from the progressive tax engine. It is
/// constructed once per request and is immutable afterwards.
///
/// # Example
///
/// ```
/// use tax_engine::models::{
///     DeductionResult, FilingProfile, FilingStatus, TaxComputation, TaxTotals,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = TaxComputation {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     profile: FilingProfile {
///         year: 2020,
///         status: FilingStatus::Single,
///         dependents: 0,
///         gross_income: Decimal::ZERO,
///     },
///     deductions: DeductionResult {
///         standard_deduction: Decimal::ZERO,
///         personal_exemption_per_person: Decimal::ZERO,
///         dependent_rate: Decimal::ZERO,
///         exemption_note: String::new(),
///         total_exemptions: Decimal::ZERO,
///         total_shield: Decimal::ZERO,
///         taxable_income: Decimal::ZERO,
///     },
///     bracket_fills: vec![],
///     totals: TaxTotals {
///         total_progressive_tax: Decimal::ZERO,
///         effective_rate: Decimal::ZERO,
///         flat_tax_amount: Decimal::ZERO,
///         flat_effective_rate: Decimal::new(2000, 2),
///         flat_difference: Decimal::ZERO,
///     },
///     duration_us: 0,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The profile the calculation was performed for.
    pub profile: FilingProfile,
    /// The deduction and exemption breakdown.
    pub deductions: DeductionResult,
    /// The bracket fills, ascending by rate; empty when taxable income is 0.
    pub bracket_fills: Vec<BracketFill>,
    /// Aggregated totals and the flat-tax comparison.
    pub totals: TaxTotals,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}
