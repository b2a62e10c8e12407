//! Progressive (marginal) tax calculation.
//!
//! Income is poured into the brackets in ascending order. Each bracket takes
//! as much of the remaining income as its width allows and taxes it at its own
//! rate; the last, unbounded bracket takes whatever is left.

use rust_decimal::Decimal;

use crate::models::{BandResult, TaxBracket, TaxResult};

/// Splits `income` across `brackets` and computes the tax owed in each.
///
/// The result always holds one [`BandResult`] per bracket, in bracket order.
/// Brackets the income never reaches report zero taxable income and zero tax.
/// Boundaries are half-open, so income exactly on an upper bound is fully
/// absorbed by the lower bracket.
///
/// Negative income is treated as zero. No rounding is applied.
///
/// `brackets` is expected to satisfy the [`TaxTable`](crate::models::TaxTable)
/// invariants; pass `table.brackets()` from a validated table.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_progressive_tax;
/// use paye_engine::models::TaxTable;
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::zra_2026();
/// let result = compute_progressive_tax(Decimal::new(9200, 0), table.brackets());
///
/// assert_eq!(result.total_tax, Decimal::new(820, 0));
/// assert_eq!(result.bands[0].taxable_amount, Decimal::new(5100, 0));
/// assert_eq!(result.bands[1].taxable_amount, Decimal::new(4100, 0));
/// assert_eq!(result.bands[2].taxable_amount, Decimal::ZERO);
/// ```
pub fn compute_progressive_tax(income: Decimal, brackets: &[TaxBracket]) -> TaxResult {
    let mut remaining = income.max(Decimal::ZERO);

    let bands: Vec<BandResult> = brackets
        .iter()
        .map(|bracket| {
            if remaining.is_zero() {
                return BandResult::zero();
            }

            let taxable_amount = match bracket.capacity() {
                Some(capacity) => remaining.min(capacity),
                None => remaining,
            }
            .max(Decimal::ZERO);
            remaining -= taxable_amount;

            BandResult {
                taxable_amount,
                tax_amount: taxable_amount * bracket.rate,
            }
        })
        .collect();

    let total_tax = bands
        .iter()
        .fold(Decimal::ZERO, |total, band| total.saturating_add(band.tax_amount));

    TaxResult { total_tax, bands }
}
