//! HTTP API module for the Progressive Tax Engine.
//!
//! This module provides the REST API endpoints for calculating federal
//! income tax against the historical rules data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
