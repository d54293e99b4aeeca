//! HTTP request handlers for the Leave Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{LeaveLedger, summarize_for_employee};
use crate::error::EngineError;

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave-summary", post(leave_summary_handler))
        .route("/leave-summary/monthly", post(monthly_summary_handler))
        .with_state(state)
}

/// Handler for POST /leave-summary.
///
/// Returns used and total days for each leave category.
async fn leave_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_ledger(&state, &request) {
        Ok(ledger) => {
            let summary = ledger.category_summary();
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                policy = %state.config().metadata().code,
                months_worked = summary.months_worked,
                warnings = summary.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Leave summary completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /leave-summary/monthly.
///
/// Returns paid and unpaid leave taken this month, and the paid and WFH
/// days left.
async fn monthly_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_ledger(&state, &request) {
        Ok(ledger) => {
            let summary = ledger.monthly_summary();
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                policy = %state.config().metadata().code,
                paid_used = %summary.paid_used,
                unpaid_used = %summary.unpaid_used,
                warnings = summary.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly summary completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Builds the ledger for a request against the loaded policy.
fn build_ledger(state: &AppState, request: &SummaryRequest) -> Result<LeaveLedger, EngineError> {
    let records = request.records()?;
    let as_of = request.as_of_or(Utc::now().date_naive());
    Ok(summarize_for_employee(
        records,
        &request.employee,
        as_of,
        state.config().policy(),
    ))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Summary request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is only in the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
