//! Deduction and exemption resolution.
//!
//! This module resolves the standard deduction and personal exemptions for
//! a filing profile and derives taxable income from them.

use rust_decimal::Decimal;

use crate::config::RulesLoader;
use crate::models::{DeductionResult, FilingProfile};

/// The first year the federal income tax allowed personal exemptions.
pub const EXEMPTION_FIRST_YEAR: i32 = 1913;

/// The last year personal exemptions were claimable.
pub const EXEMPTION_LAST_YEAR: i32 = 2017;

/// Note attached to calculations for years outside the exemption era.
const SUSPENSION_NOTE: &str =
    "Personal exemptions were suspended starting in 2018 under the Tax Cuts and Jobs Act.";

/// Resolves deductions and exemptions for a profile.
///
/// The standard deduction is looked up for the profile's year and filing
/// status. Personal exemptions are only applied when the year falls inside
/// the exemption era (1913 through 2017 inclusive); outside that window the
/// exemption components are zero regardless of what the rules data holds,
/// and the result carries a fixed note explaining the suspension.
///
/// Lookups for years absent from the rules data resolve to zero amounts,
/// so this function cannot fail: the worst case is a result whose shield is
/// zero and whose taxable income equals gross income.
///
/// The derived fields obey:
///
/// * `total_exemptions = personal_exemption_per_person + dependent_rate * dependents`
/// * `total_shield = standard_deduction + total_exemptions`
/// * `taxable_income = max(0, gross_income - total_shield)`
///
/// # Examples
///
/// ```no_run
/// use tax_engine::calculation::resolve_deductions;
/// use tax_engine::config::RulesLoader;
/// use tax_engine::models::{FilingProfile, FilingStatus};
/// use rust_decimal::Decimal;
///
/// let rules = RulesLoader::load("./config/ustax")?;
/// let profile = FilingProfile {
///     year: 2020,
///     status: FilingStatus::Single,
///     dependents: 0,
///     gross_income: Decimal::from(60000),
/// };
///
/// let deductions = resolve_deductions(&profile, &rules);
/// assert_eq!(deductions.taxable_income, Decimal::from(47600));
/// # Ok::<(), tax_engine::error::EngineError>(())
/// ```
pub fn resolve_deductions(profile: &FilingProfile, rules: &RulesLoader) -> DeductionResult {
    let standard_deduction = rules.get_standard_deduction(profile.year, profile.status);

    let exemption_era =
        (EXEMPTION_FIRST_YEAR..=EXEMPTION_LAST_YEAR).contains(&profile.year);

    let (personal_exemption_per_person, dependent_rate, exemption_note) = if exemption_era {
        let (per_person, dependent_rate, note) =
            rules.get_personal_exemption(profile.year, profile.status);
        (per_person, dependent_rate, note.to_string())
    } else {
        (Decimal::ZERO, Decimal::ZERO, SUSPENSION_NOTE.to_string())
    };

    let total_exemptions =
        personal_exemption_per_person + dependent_rate * Decimal::from(profile.dependents);
    let total_shield = standard_deduction + total_exemptions;
    let taxable_income = (profile.gross_income - total_shield).max(Decimal::ZERO);

    DeductionResult {
        standard_deduction,
        personal_exemption_per_person,
        dependent_rate,
        exemption_note,
        total_exemptions,
        total_shield,
        taxable_income,
    }
}
