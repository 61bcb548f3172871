//! Core data models for the Progressive Tax Engine.
//!
//! This module contains all the domain values used throughout the engine.

mod computation;
mod profile;

pub use computation::{BracketFill, DeductionResult, TaxComputation, TaxTotals};
pub use profile::{FilingProfile, FilingStatus};
