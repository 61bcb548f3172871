//! Rules data types for the Progressive Tax Engine.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML rules data files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::FilingStatus;

/// A contiguous income range taxed at a single marginal rate.
///
/// `upper` is `None` for the unbounded top bracket; there is no numeric
/// sentinel anywhere in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub lower: Decimal,
    /// The upper bound of the bracket (exclusive); `None` means unbounded.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// The marginal rate applied within this bracket, as a fraction in [0,1].
    pub rate: Decimal,
}

/// Standard deduction amounts for one year, by filing status.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionEntry {
    /// Deduction for single filers.
    pub single: Decimal,
    /// Deduction for married couples filing jointly.
    pub married_joint: Decimal,
    /// Deduction for married taxpayers filing separately.
    pub married_separate: Decimal,
    /// Deduction for heads of household.
    pub head_of_household: Decimal,
}

impl DeductionEntry {
    /// Returns the deduction amount for the given filing status.
    pub fn for_status(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedJoint => self.married_joint,
            FilingStatus::MarriedSeparate => self.married_separate,
            FilingStatus::HeadOfHousehold => self.head_of_household,
        }
    }
}

/// Personal exemption amounts for one year.
#[derive(Debug, Clone, Deserialize)]
pub struct ExemptionEntry {
    /// Exemption for single filers.
    pub single: Decimal,
    /// Exemption for married couples filing jointly.
    pub married_joint: Decimal,
    /// Exemption for married taxpayers filing separately.
    pub married_separate: Decimal,
    /// Exemption for heads of household.
    pub head_of_household: Decimal,
    /// Additional exemption amount allowed per dependent.
    pub dependent: Decimal,
    /// Explanatory note about the exemption rules for the year.
    #[serde(default)]
    pub note: String,
}

impl ExemptionEntry {
    /// Returns the filer exemption amount for the given filing status.
    pub fn for_status(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedJoint => self.married_joint,
            FilingStatus::MarriedSeparate => self.married_separate,
            FilingStatus::HeadOfHousehold => self.head_of_household,
        }
    }
}

/// Standard deductions file structure (`deductions.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionsConfig {
    /// Map of year to per-status deduction amounts.
    pub years: BTreeMap<i32, DeductionEntry>,
}

/// Personal exemptions file structure (`exemptions.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExemptionsConfig {
    /// Map of year to exemption amounts.
    pub years: BTreeMap<i32, ExemptionEntry>,
}

/// Bracket schedules for a single year (`brackets/<year>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct BracketFileConfig {
    /// The tax year these schedules apply to.
    pub year: i32,
    /// Ordered bracket schedules keyed by filing status.
    pub schedules: HashMap<FilingStatus, Vec<TaxBracket>>,
}

/// The complete tax rules loaded from a rules directory.
///
/// This struct aggregates all data loaded from the deduction, exemption,
/// and bracket files. Missing years or statuses are represented by the
/// absence of an entry; lookups degrade to zero defaults rather than
/// failing.
#[derive(Debug, Clone)]
pub struct TaxRules {
    /// Standard deductions by year.
    deductions: BTreeMap<i32, DeductionEntry>,
    /// Personal exemptions by year.
    exemptions: BTreeMap<i32, ExemptionEntry>,
    /// Bracket schedules by year, then filing status.
    schedules: BTreeMap<i32, HashMap<FilingStatus, Vec<TaxBracket>>>,
}

impl TaxRules {
    /// Creates a new TaxRules from its component parts.
    pub fn new(
        deductions: BTreeMap<i32, DeductionEntry>,
        exemptions: BTreeMap<i32, ExemptionEntry>,
        schedules: BTreeMap<i32, HashMap<FilingStatus, Vec<TaxBracket>>>,
    ) -> Self {
        Self {
            deductions,
            exemptions,
            schedules,
        }
    }

    /// Returns the deduction entry for a year, if present.
    pub fn deductions(&self, year: i32) -> Option<&DeductionEntry> {
        self.deductions.get(&year)
    }

    /// Returns the exemption entry for a year, if present.
    pub fn exemptions(&self, year: i32) -> Option<&ExemptionEntry> {
        self.exemptions.get(&year)
    }

    /// Returns the bracket schedule for a year and status, if present.
    pub fn schedule(&self, year: i32, status: FilingStatus) -> Option<&[TaxBracket]> {
        self.schedules
            .get(&year)
            .and_then(|by_status| by_status.get(&status))
            .map(|brackets| brackets.as_slice())
    }

    /// Returns the years that have at least one bracket schedule.
    pub fn covered_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.schedules.keys().copied()
    }
}
