//! Payroll aggregation.
//!
//! This module combines the three payroll inputs into gross pay, applies the
//! statutory contributions and progressive tax, and derives net salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ContributionRates, PayrollInputs, PayrollResult, TaxBracket};

use super::{compute_contributions, compute_progressive_tax};

/// Computes the full payroll breakdown for one set of inputs.
///
/// Each input is clamped to zero first. Gross pay is basic pay plus
/// allowances; the statutory deduction is neither taxed nor used for
/// contributions, it only adds to total deductions. Net salary is floored at
/// zero when deductions exceed gross pay.
///
/// Sums saturate at `Decimal::MAX` instead of overflowing, so any input
/// produces a result. Figures at that scale carry no meaning; the HTTP layer
/// rejects inputs above [`max_payroll_input`](crate::models::max_payroll_input).
///
/// # Arguments
///
/// * `inputs` - The raw host-supplied figures
/// * `brackets` - The bracket table, normally `table.brackets()` of a validated table
/// * `rates` - The statutory contribution rates
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::models::{ContributionRates, PayrollInputs, TaxTable};
/// use rust_decimal::Decimal;
///
/// let inputs = PayrollInputs {
///     basic_pay: Decimal::new(15000, 0),
///     allowances: Decimal::new(2000, 0),
///     statutory_deduction: Decimal::new(500, 0),
/// };
/// let result = compute_payroll(
///     &inputs,
///     TaxTable::zra_2026().brackets(),
///     &ContributionRates::zra_2026(),
/// );
///
/// assert_eq!(result.gross_pay, Decimal::new(17000, 0));
/// assert_eq!(result.tax_result.total_tax, Decimal::new(3398, 0));
/// assert_eq!(result.net_salary, Decimal::new(12082, 0));
/// ```
pub fn compute_payroll(
    inputs: &PayrollInputs,
    brackets: &[TaxBracket],
    rates: &ContributionRates,
) -> PayrollResult {
    let inputs = inputs.clamped();

    let gross_pay = inputs.basic_pay.saturating_add(inputs.allowances);
    let contributions = compute_contributions(gross_pay, rates);
    let tax_result = compute_progressive_tax(gross_pay, brackets);

    let total_deductions = contributions
        .total
        .saturating_add(tax_result.total_tax)
        .saturating_add(inputs.statutory_deduction);
    let net_salary = (gross_pay - total_deductions).max(Decimal::ZERO);

    debug!(
        gross_pay = %gross_pay,
        total_tax = %tax_result.total_tax,
        total_deductions = %total_deductions,
        net_salary = %net_salary,
        "Payroll computed"
    );

    PayrollResult {
        gross_pay,
        contributions,
        tax_result,
        total_deductions,
        net_salary,
    }
}
