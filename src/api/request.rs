//! Request types for the Progressive Tax Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FilingProfile, FilingStatus};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to calculate federal income tax for a
/// single filing profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
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

impl From<CalculationRequest> for FilingProfile {
    fn from(req: CalculationRequest) -> Self {
        FilingProfile {
            year: req.year,
            status: req.status,
            dependents: req.dependents,
            gross_income: req.gross_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "year": 2020,
            "status": "single",
            "dependents": 2,
            "gross_income": "60000"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2020);
        assert_eq!(request.status, FilingStatus::Single);
        assert_eq!(request.dependents, 2);
        assert_eq!(request.gross_income, Decimal::from(60000));
    }

    #[test]
    fn test_deserialize_without_dependents() {
        let json = r#"{
            "year": 1913,
            "status": "married_joint",
            "gross_income": "25000"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dependents, 0);
    }

    #[test]
    fn test_profile_conversion() {
        let req = CalculationRequest {
            year: 2017,
            status: FilingStatus::HeadOfHousehold,
            dependents: 3,
            gross_income: Decimal::from_str("85000.50").unwrap(),
        };

        let profile: FilingProfile = req.into();
        assert_eq!(profile.year, 2017);
        assert_eq!(profile.status, FilingStatus::HeadOfHousehold);
        assert_eq!(profile.dependents, 3);
        assert_eq!(profile.gross_income, Decimal::from_str("85000.50").unwrap());
    }
}
