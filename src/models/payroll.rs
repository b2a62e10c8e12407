//! Payroll input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TaxResult;

/// Largest figure the HTTP API accepts for a payroll input or a taxable
/// income: one quadrillion.
pub fn max_payroll_input() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// The three figures a host supplies for one payroll calculation.
///
/// The default value (all zeros) is the reset state of a calculator.
///
/// # Example
///
/// ```
/// use paye_engine::models::PayrollInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = PayrollInputs {
///     basic_pay: Decimal::new(-100, 0),
///     allowances: Decimal::new(2000, 0),
///     statutory_deduction: Decimal::ZERO,
/// };
/// assert_eq!(inputs.clamped().basic_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInputs {
    /// Basic monthly pay.
    pub basic_pay: Decimal,
    /// Allowances paid on top of basic pay.
    pub allowances: Decimal,
    /// A fixed statutory deduction, subtracted after tax.
    pub statutory_deduction: Decimal,
}

impl PayrollInputs {
    /// Returns a copy with every negative figure replaced by zero.
    pub fn clamped(&self) -> Self {
        Self {
            basic_pay: self.basic_pay.max(Decimal::ZERO),
            allowances: self.allowances.max(Decimal::ZERO),
            statutory_deduction: self.statutory_deduction.max(Decimal::ZERO),
        }
    }
}

/// Flat statutory contribution rates applied to gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// National Pension Scheme Authority rate.
    pub napsa: Decimal,
    /// National Health Insurance Management Authority rate.
    pub nhima: Decimal,
}

impl ContributionRates {
    /// Creates a validated set of contribution rates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidContributionRate`] if either rate lies
    /// outside `[0, 1)`.
    pub fn new(napsa: Decimal, nhima: Decimal) -> EngineResult<Self> {
        let rates = Self { napsa, nhima };
        rates.validate()?;
        Ok(rates)
    }

    /// NAPSA 5% and NHIMA 1%, as applied in 2026.
    pub fn zra_2026() -> Self {
        Self {
            napsa: Decimal::new(5, 2),
            nhima: Decimal::new(1, 2),
        }
    }

    /// Checks that both rates lie in `[0, 1)`.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, rate) in [("napsa", self.napsa), ("nhima", self.nhima)] {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(EngineError::InvalidContributionRate {
                    field: field.to_string(),
                    message: format!("rate {} must be in [0, 1)", rate),
                });
            }
        }
        Ok(())
    }
}

/// Statutory contributions deducted from gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    /// NAPSA pension contribution.
    pub napsa: Decimal,
    /// NHIMA health insurance contribution.
    pub nhima: Decimal,
    /// Sum of all contributions.
    pub total: Decimal,
}

/// The complete breakdown of one payroll calculation.
///
/// `net_salary` is floored at zero, so when deductions exceed gross pay
/// `net_salary + total_deductions` is greater than `gross_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Basic pay plus allowances.
    pub gross_pay: Decimal,
    /// Statutory contributions on gross pay.
    pub contributions: Contributions,
    /// PAYE owed on gross pay, with the per-band breakdown.
    pub tax_result: TaxResult,
    /// Contributions plus PAYE plus the statutory deduction.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions, never negative.
    pub net_salary: Decimal,
}
