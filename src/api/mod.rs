//! HTTP API module for the PayShare engine.
//!
//! This module provides the REST endpoints for computing a payslip and for
//! splitting a household's expenses between two earners.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExpenseRequest, HouseholdRequest, PersonRequest};
pub use response::{
    ApiError, ApiErrorResponse, EarnerReport, HouseholdResponse, PayslipResponse,
    financials_display,
};
pub use state::AppState;
