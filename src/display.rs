//! Display formatting for payroll results.
//!
//! Calculations keep full decimal precision; the helpers here round to two
//! places only when producing text for a host to show.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{PayrollResult, TaxResult};

/// Rounds a monetary value to two decimal places, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use paye_engine::display::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(123455, 3)), Decimal::new(12346, 2));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly two decimal places and no grouping.
///
/// # Examples
///
/// ```
/// use paye_engine::display::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(5100, 0)), "5100.00");
/// ```
pub fn format_fixed(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Formats a value as money: currency symbol, space, thousands-grouped
/// amount with two decimal places.
///
/// # Examples
///
/// ```
/// use paye_engine::display::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(17000, 0), "K"), "K 17,000.00");
/// ```
pub fn format_money(value: Decimal, symbol: &str) -> String {
    let fixed = format_fixed(value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{} {}{}.{}", symbol, sign, group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// One row of the band breakdown as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDisplay {
    /// Income chargeable in this band (e.g., "4100.00").
    pub chargeable: String,
    /// Tax due in this band (e.g., "820.00").
    pub tax_due: String,
}

/// A tax result as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDisplay {
    /// Total tax as money text.
    pub total_tax: String,
    /// Per-band rows in bracket order.
    pub bands: Vec<BandDisplay>,
}

impl TaxDisplay {
    /// Renders a tax result, prefixing the total with `symbol`.
    pub fn new(result: &TaxResult, symbol: &str) -> Self {
        Self {
            total_tax: format_money(result.total_tax, symbol),
            bands: result
                .bands
                .iter()
                .map(|band| BandDisplay {
                    chargeable: format_fixed(band.taxable_amount),
                    tax_due: format_fixed(band.tax_amount),
                })
                .collect(),
        }
    }
}

/// Every figure of a payroll result as display text.
///
/// # Example
///
/// ```
/// use paye_engine::calculation::compute_payroll;
/// use paye_engine::display::PayrollDisplay;
/// use paye_engine::models::{ContributionRates, PayrollInputs, TaxTable};
/// use rust_decimal::Decimal;
///
/// let inputs = PayrollInputs {
///     basic_pay: Decimal::new(15000, 0),
///     allowances: Decimal::new(2000, 0),
///     statutory_deduction: Decimal::new(500, 0),
/// };
/// let result = compute_payroll(&inputs, TaxTable::zra_2026().brackets(), &ContributionRates::zra_2026());
/// let display = PayrollDisplay::new(&result, "K");
///
/// assert_eq!(display.net_salary, "K 12,082.00");
/// assert_eq!(display.bands[3].chargeable, "3400.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDisplay {
    /// Gross pay.
    pub gross_pay: String,
    /// NAPSA contribution.
    pub napsa: String,
    /// NHIMA contribution.
    pub nhima: String,
    /// Sum of contributions.
    pub total_contributions: String,
    /// PAYE owed.
    pub total_tax: String,
    /// All deductions.
    pub total_deductions: String,
    /// Net salary.
    pub net_salary: String,
    /// Per-band rows in bracket order.
    pub bands: Vec<BandDisplay>,
}

impl PayrollDisplay {
    /// Renders a payroll result, prefixing money figures with `symbol`.
    pub fn new(result: &PayrollResult, symbol: &str) -> Self {
        let tax = TaxDisplay::new(&result.tax_result, symbol);

        Self {
            gross_pay: format_money(result.gross_pay, symbol),
            napsa: format_money(result.contributions.napsa, symbol),
            nhima: format_money(result.contributions.nhima, symbol),
            total_contributions: format_money(result.contributions.total, symbol),
            total_tax: tax.total_tax,
            total_deductions: format_money(result.total_deductions, symbol),
            net_salary: format_money(result.net_salary, symbol),
            bands: tax.bands,
        }
    }
}
