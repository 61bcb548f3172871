//! Application state for the Progressive Tax Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::TaxEngine;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the tax engine with its loaded rules.
#[derive(Clone)]
pub struct AppState {
    /// The engine over the loaded rules.
    engine: Arc<TaxEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: TaxEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the tax engine.
    pub fn engine(&self) -> &TaxEngine {
        &self.engine
    }
}
