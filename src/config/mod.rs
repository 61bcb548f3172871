//! Rules data loading and management for the Progressive Tax Engine.
//!
//! This module provides functionality to load tax rules from YAML files,
//! including standard deductions, personal exemptions, and marginal bracket
//! schedules.
//!
//! # Example
//!
//! ```no_run
//! use tax_engine::config::RulesLoader;
//!
//! let rules = RulesLoader::load("./config/ustax").unwrap();
//! let deduction = rules.get_standard_deduction(2020, tax_engine::models::FilingStatus::Single);
//! println!("2020 single standard deduction: {}", deduction);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    BracketFileConfig, DeductionEntry, DeductionsConfig, ExemptionEntry, ExemptionsConfig,
    TaxBracket, TaxRules,
};
