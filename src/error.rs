//! Error types for the Progressive Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during tax calculation.
//!
//! Gaps in the historical rules data (a year or filing status with no entry)
//! are deliberately *not* errors: lookups degrade to zero-valued fields so a
//! calculation always completes. Only configuration-loading failures and
//! invalid caller input surface here.

use thiserror::Error;

/// The main error type for the Progressive Tax Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use tax_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/deductions.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rules file not found: /missing/deductions.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A rules data file was not found at the specified path.
    #[error("Rules file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A rules data file could not be parsed or failed validation.
    #[error("Failed to parse rules file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// A filing profile contained invalid caller input.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
