//! Progressive Tax Engine for historical US federal income tax
//!
//! This crate computes the marginal-bracket ("bucket") decomposition of a
//! taxpayer's income for any year covered by the loaded rules data, along
//! with standard deduction, personal exemption, and a 20% flat-tax
//! comparison.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
