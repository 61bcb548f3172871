//! Filing profile model and related types.
//!
//! This module defines the FilingProfile struct and FilingStatus enum
//! representing a single tax calculation request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a federal filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    /// Unmarried taxpayer.
    Single,
    /// Married couple filing a joint return.
    MarriedJoint,
    /// Married taxpayer filing separately.
    MarriedSeparate,
    /// Unmarried taxpayer maintaining a household for dependents.
    HeadOfHousehold,
}

/// Represents one tax calculation request.
///
/// A profile is a pure input value: it has no persisted identity and is
/// created fresh per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingProfile {
    /// The tax year to calculate for.
    pub year: i32,
    /// The filing status.
    pub status: FilingStatus,
    /// Number of dependents claimed.
    #[serde(default)]
    pub dependents: u32,
    /// Gross annual income before any deductions.
    pub gross_income: Decimal,
}

impl FilingProfile {
    /// Validates the profile, rejecting caller programming errors.
    ///
    /// Historical-data gaps (a year with no rules entry) are *not* input
    /// errors and are handled by zero-defaulting downstream; only values
    /// that can never be meaningful are rejected here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` if `gross_income` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use tax_engine::models::{FilingProfile, FilingStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = FilingProfile {
    ///     year: 2020,
    ///     status: FilingStatus::Single,
    ///     dependents: 0,
    ///     gross_income: Decimal::from(60000),
    /// };
    /// assert!(profile.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.gross_income < Decimal::ZERO {
            return Err(EngineError::InvalidProfile {
                field: "gross_income".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
