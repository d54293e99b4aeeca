//! HTTP API module for the Leave Accrual Engine.
//!
//! This module provides the REST endpoints that return an employee's
//! per-category balances and the monthly paid/unpaid view.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
