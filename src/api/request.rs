//! Request types for the PAYE engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/tax` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayrollInputs, max_payroll_input};

use super::response::ApiError;

/// Request body for the `/calculate` endpoint.
///
/// Any field left out counts as zero, like an empty calculator field.
/// Negative values are accepted and clamped to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Basic monthly pay.
    #[serde(default)]
    pub basic_pay: Decimal,
    /// Allowances paid on top of basic pay.
    #[serde(default)]
    pub allowances: Decimal,
    /// Fixed statutory deduction.
    #[serde(default)]
    pub statutory_deduction: Decimal,
}

/// Request body for the `/tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// Gross income to run through the tax bands.
    pub income: Decimal,
}

impl PayrollRequest {
    /// Rejects any field above [`max_payroll_input`].
    pub fn validate(&self) -> Result<(), ApiError> {
        check_limit("basic_pay", self.basic_pay)?;
        check_limit("allowances", self.allowances)?;
        check_limit("statutory_deduction", self.statutory_deduction)
    }
}

impl TaxRequest {
    /// Rejects an income above [`max_payroll_input`].
    pub fn validate(&self) -> Result<(), ApiError> {
        check_limit("income", self.income)
    }
}

fn check_limit(field: &str, value: Decimal) -> Result<(), ApiError> {
    let limit = max_payroll_input();
    if value > limit {
        return Err(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("{} exceeds the maximum of {}", field, limit),
            format!("{}: {}", field, value),
        ));
    }
    Ok(())
}

impl From<PayrollRequest> for PayrollInputs {
    fn from(req: PayrollRequest) -> Self {
        PayrollInputs {
            basic_pay: req.basic_pay,
            allowances: req.allowances,
            statutory_deduction: req.statutory_deduction,
        }
    }
}
