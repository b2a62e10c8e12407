//! HTTP API module for the PAYE engine.
//!
//! This module provides the REST API endpoints a calculator front end calls
//! whenever one of its inputs changes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, TaxRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollResponse, TaxBandsResponse, TaxResponse};
pub use state::AppState;
