//! Calculation logic for the Progressive Tax Engine.
//!
//! This module contains all the calculation functions for determining tax,
//! including deduction and exemption resolution, marginal bracket
//! decomposition, the flat-tax comparison, and the engine that orchestrates
//! a full calculation.

mod brackets;
mod deductions;
mod engine;
mod flat_tax;

pub use brackets::decompose_brackets;
pub use deductions::{EXEMPTION_FIRST_YEAR, EXEMPTION_LAST_YEAR, resolve_deductions};
pub use engine::TaxEngine;
pub use flat_tax::{FlatTaxComparison, compare_flat_tax, flat_tax_rate};
