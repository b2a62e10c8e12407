//! Response types for the PAYE engine API.
//!
//! This module defines the success bodies returned by each endpoint and the
//! error response structure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::TaxYearMetadata;
use crate::display::{PayrollDisplay, TaxDisplay};
use crate::models::{ContributionRates, PayrollInputs, PayrollResult, TaxBracket, TaxResult};

/// Response body for `/calculate` and `/reset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Code of the tax year configuration used.
    pub tax_year: String,
    /// The inputs after clamping negatives to zero.
    pub inputs: PayrollInputs,
    /// The exact calculation result.
    pub result: PayrollResult,
    /// The result formatted for display.
    pub display: PayrollDisplay,
}

/// Response body for `/tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResponse {
    /// Code of the tax year configuration used.
    pub tax_year: String,
    /// The income after clamping negatives to zero.
    pub income: Decimal,
    /// The exact calculation result.
    pub result: TaxResult,
    /// The result formatted for display.
    pub display: TaxDisplay,
}

/// Response body for `/tax-bands`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBandsResponse {
    /// The configured tax year.
    pub tax_year: TaxYearMetadata,
    /// The configured contribution rates.
    pub contributions: ContributionRates,
    /// The configured brackets in ascending order.
    pub bands: Vec<TaxBracket>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_error_code() {
        let error = ApiError::validation_error("invalid type: map, expected a Decimal");
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_bad_request_status() {
        let response = ApiErrorResponse::bad_request(ApiError::malformed_json("oops"));
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_error_response_renders_status_and_body() {
        let response =
            ApiErrorResponse::bad_request(ApiError::validation_error("income too large"))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, "income too large");
    }
}
