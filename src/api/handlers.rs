//! HTTP request handlers for the PAYE engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, compute_progressive_tax};
use crate::config::ConfigLoader;
use crate::display::{PayrollDisplay, TaxDisplay};
use crate::models::PayrollInputs;

use super::request::{PayrollRequest, TaxRequest};
use super::response::{
    ApiError, ApiErrorResponse, PayrollResponse, TaxBandsResponse, TaxResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/reset", post(reset_handler))
        .route("/tax", post(tax_handler))
        .route("/tax-bands", get(tax_bands_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Accepts the three payroll inputs and returns the full breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(error) = request.validate() {
        return validation_response(error, correlation_id);
    }

    let inputs: PayrollInputs = request.into();
    if inputs != inputs.clamped() {
        warn!(
            correlation_id = %correlation_id,
            "Negative inputs clamped to zero"
        );
    }

    json_response(
        StatusCode::OK,
        perform_calculation(&inputs, state.config(), correlation_id),
    )
}

/// Handler for POST /reset.
///
/// Returns the breakdown for all-zero inputs.
async fn reset_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculator reset");

    json_response(
        StatusCode::OK,
        perform_calculation(&PayrollInputs::default(), state.config(), correlation_id),
    )
}

/// Handler for POST /tax.
///
/// Runs a single income figure through the tax bands.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax band request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if let Err(error) = request.validate() {
        return validation_response(error, correlation_id);
    }

    let config = state.config();
    let income = request.income.max(Decimal::ZERO);
    let result = compute_progressive_tax(income, config.tax_table().brackets());

    info!(
        correlation_id = %correlation_id,
        income = %income,
        total_tax = %result.total_tax,
        "Tax calculation completed"
    );

    json_response(
        StatusCode::OK,
        TaxResponse {
            tax_year: config.tax_year().code.clone(),
            income,
            display: TaxDisplay::new(&result, &config.tax_year().currency_symbol),
            result,
        },
    )
}

/// Handler for GET /tax-bands.
///
/// Returns the configured tax year so a host can label the band rows.
async fn tax_bands_handler(State(state): State<AppState>) -> Response {
    let config = state.config();

    json_response(
        StatusCode::OK,
        TaxBandsResponse {
            tax_year: config.tax_year().clone(),
            contributions: config.contribution_rates().clone(),
            bands: config.tax_table().brackets().to_vec(),
        },
    )
}

/// Performs the payroll calculation and wraps it with display text and metadata.
fn perform_calculation(
    inputs: &PayrollInputs,
    config: &ConfigLoader,
    correlation_id: Uuid,
) -> PayrollResponse {
    let start_time = Instant::now();

    let result = compute_payroll(
        inputs,
        config.tax_table().brackets(),
        config.contribution_rates(),
    );
    let display = PayrollDisplay::new(&result, &config.tax_year().currency_symbol);

    info!(
        correlation_id = %correlation_id,
        gross_pay = %result.gross_pay,
        net_salary = %result.net_salary,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        tax_year: config.tax_year().code.clone(),
        inputs: inputs.clamped(),
        result,
        display,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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

    ApiErrorResponse::bad_request(error).into_response()
}

/// Maps an out-of-range request field to a 400 response.
fn validation_response(error: ApiError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error.message,
        "Request field out of range"
    );
    ApiErrorResponse::bad_request(error).into_response()
}
