//! Calculation orchestration.
//!
//! This module ties the calculation steps together: deduction resolution,
//! bracket decomposition, totals, and the flat-tax comparison.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::RulesLoader;
use crate::error::EngineResult;
use crate::models::{FilingProfile, TaxComputation, TaxTotals};

use super::brackets::decompose_brackets;
use super::deductions::resolve_deductions;
use super::flat_tax::compare_flat_tax;

/// The progressive tax engine.
///
/// Owns the loaded rules and performs complete calculations. The engine is
/// deterministic: the same profile against the same rules always produces
/// the same deductions, fills, and totals. Only the calculation id,
/// timestamp, and duration vary between runs.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    rules: RulesLoader,
}

impl TaxEngine {
    /// Creates an engine over loaded rules.
    pub fn new(rules: RulesLoader) -> Self {
        Self { rules }
    }

    /// Returns a reference to the rules the engine was built with.
    pub fn rules(&self) -> &RulesLoader {
        &self.rules
    }

    /// Performs a full tax calculation for a profile.
    ///
    /// The steps are:
    /// 1. Validate the profile
    /// 2. Resolve the standard deduction and exemptions into taxable income
    /// 3. Decompose taxable income across the year's bracket schedule
    /// 4. Total the fills and derive the effective rate
    /// 5. Compare against the 20% flat tax on gross income
    ///
    /// Years absent from the rules data flow through as zero deductions and
    /// an empty schedule, yielding a valid zero-tax result rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` when the profile fails validation
    /// (negative gross income).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tax_engine::calculation::TaxEngine;
    /// use tax_engine::config::RulesLoader;
    /// use tax_engine::models::{FilingProfile, FilingStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let engine = TaxEngine::new(RulesLoader::load("./config/ustax")?);
    /// let result = engine.compute(&FilingProfile {
    ///     year: 2020,
    ///     status: FilingStatus::Single,
    ///     dependents: 0,
    ///     gross_income: Decimal::from(60000),
    /// })?;
    /// println!("owed: {}", result.totals.total_progressive_tax);
    /// # Ok::<(), tax_engine::error::EngineError>(())
    /// ```
    pub fn compute(&self, profile: &FilingProfile) -> EngineResult<TaxComputation> {
        let start_time = Instant::now();

        profile.validate()?;

        let deductions = resolve_deductions(profile, &self.rules);

        let brackets = self.rules.get_brackets(profile.year, profile.status);
        let bracket_fills = decompose_brackets(deductions.taxable_income, brackets);

        let total_progressive_tax: Decimal = bracket_fills.iter().map(|f| f.tax_owed).sum();
        let effective_rate = if profile.gross_income > Decimal::ZERO {
            (total_progressive_tax / profile.gross_income * Decimal::from(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        let comparison = compare_flat_tax(profile.gross_income, total_progressive_tax);

        let duration_us = start_time.elapsed().as_micros() as u64;

        Ok(TaxComputation {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: profile.clone(),
            deductions,
            bracket_fills,
            totals: TaxTotals {
                total_progressive_tax,
                effective_rate,
                flat_tax_amount: comparison.flat_tax_amount,
                flat_effective_rate: comparison.flat_effective_rate,
                flat_difference: comparison.flat_difference,
            },
            duration_us,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeductionEntry, ExemptionEntry, TaxBracket, TaxRules};
    use crate::error::EngineError;
    use crate::models::FilingStatus;
    use std::collections::{BTreeMap, HashMap};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(lower: &str, upper: Option<&str>, rate: &str) -> TaxBracket {
        TaxBracket {
            lower: dec(lower),
            upper: upper.map(dec),
            rate: dec(rate),
        }
    }

    fn create_test_engine() -> TaxEngine {
        let mut deductions = BTreeMap::new();
        deductions.insert(
            2020,
            DeductionEntry {
                single: dec("12400"),
                married_joint: dec("24800"),
                married_separate: dec("12400"),
                head_of_household: dec("18650"),
            },
        );

        let mut exemptions = BTreeMap::new();
        exemptions.insert(
            2017,
            ExemptionEntry {
                single: dec("4050"),
                married_joint: dec("8100"),
                married_separate: dec("4050"),
                head_of_household: dec("4050"),
                dependent: dec("4050"),
                note: String::new(),
            },
        );

        let single_2020 = vec![
            bracket("0", Some("9875"), "0.10"),
            bracket("9875", Some("40125"), "0.12"),
            bracket("40125", Some("85525"), "0.22"),
            bracket("85525", Some("163300"), "0.24"),
            bracket("163300", Some("207350"), "0.32"),
            bracket("207350", Some("518400"), "0.35"),
            bracket("518400", None, "0.37"),
        ];
        let mut by_status = HashMap::new();
        by_status.insert(FilingStatus::Single, single_2020);
        let mut schedules = BTreeMap::new();
        schedules.insert(2020, by_status);

        TaxEngine::new(RulesLoader::from_rules(TaxRules::new(
            deductions, exemptions, schedules,
        )))
    }

    fn create_test_profile(gross_income: &str) -> FilingProfile {
        FilingProfile {
            year: 2020,
            status: FilingStatus::Single,
            dependents: 0,
            gross_income: dec(gross_income),
        }
    }

    #[test]
    fn test_full_calculation_2020_single_60000() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("60000")).unwrap();

        assert_eq!(result.deductions.taxable_income, dec("47600"));
        assert_eq!(result.bracket_fills.len(), 3);
        assert_eq!(result.totals.total_progressive_tax, dec("6262.00"));
        assert_eq!(result.totals.effective_rate, dec("10.44"));
        assert_eq!(result.totals.flat_tax_amount, dec("12000.00"));
        assert_eq!(result.totals.flat_difference, dec("5738.00"));
    }

    #[test]
    fn test_fills_partition_taxable_income() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("250000")).unwrap();

        let filled: Decimal = result.bracket_fills.iter().map(|f| f.amount_filled).sum();
        assert_eq!(filled, result.deductions.taxable_income);
    }

    #[test]
    fn test_total_equals_sum_of_fill_taxes() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("123456.78")).unwrap();

        let sum: Decimal = result.bracket_fills.iter().map(|f| f.tax_owed).sum();
        assert_eq!(result.totals.total_progressive_tax, sum);
    }

    #[test]
    fn test_income_below_shield_yields_zero_tax() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("8000")).unwrap();

        assert_eq!(result.deductions.taxable_income, Decimal::ZERO);
        assert!(result.bracket_fills.is_empty());
        assert_eq!(result.totals.total_progressive_tax, Decimal::ZERO);
        assert_eq!(result.totals.effective_rate, Decimal::ZERO);
        // The flat tax ignores the shield entirely.
        assert_eq!(result.totals.flat_tax_amount, dec("1600.00"));
        assert_eq!(result.totals.flat_difference, dec("1600.00"));
    }

    #[test]
    fn test_zero_gross_income_yields_all_zero_totals() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("0")).unwrap();

        assert_eq!(result.totals.total_progressive_tax, Decimal::ZERO);
        assert_eq!(result.totals.effective_rate, Decimal::ZERO);
        assert_eq!(result.totals.flat_tax_amount, Decimal::ZERO);
        assert_eq!(result.totals.flat_difference, Decimal::ZERO);
    }

    #[test]
    fn test_year_without_rules_yields_zero_tax_result() {
        let engine = create_test_engine();
        let mut profile = create_test_profile("60000");
        profile.year = 1875;

        let result = engine.compute(&profile).unwrap();

        // No deduction data and no schedule: everything taxable, nothing
        // owed, flat comparison still meaningful.
        assert_eq!(result.deductions.total_shield, Decimal::ZERO);
        assert_eq!(result.deductions.taxable_income, dec("60000"));
        assert!(result.bracket_fills.is_empty());
        assert_eq!(result.totals.total_progressive_tax, Decimal::ZERO);
        assert_eq!(result.totals.flat_difference, dec("12000.00"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let engine = create_test_engine();

        let result = engine.compute(&create_test_profile("-1"));

        assert!(result.is_err());
        match result.unwrap_err() {
            EngineError::InvalidProfile { field, .. } => assert_eq!(field, "gross_income"),
            other => panic!("Expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn test_computation_is_deterministic() {
        let engine = create_test_engine();
        let profile = create_test_profile("87654.32");

        let first = engine.compute(&profile).unwrap();
        let second = engine.compute(&profile).unwrap();

        // Identity fields differ per run; the computed fields must not.
        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.deductions, second.deductions);
        assert_eq!(first.bracket_fills, second.bracket_fills);
        assert_eq!(first.totals, second.totals);
    }

    #[test]
    fn test_result_carries_engine_version_and_profile() {
        let engine = create_test_engine();
        let profile = create_test_profile("60000");

        let result = engine.compute(&profile).unwrap();

        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.profile, profile);
    }

    #[test]
    fn test_effective_rate_rounds_to_two_places() {
        let engine = create_test_engine();

        // taxable 37600: 987.50 + 3327.00 = 4314.50; 4314.50 / 50000 = 8.629%
        let result = engine.compute(&create_test_profile("50000")).unwrap();

        assert_eq!(result.totals.effective_rate, dec("8.63"));
    }
}
