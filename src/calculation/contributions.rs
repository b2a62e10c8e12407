//! Statutory contribution calculation.
//!
//! NAPSA and NHIMA contributions are flat percentages of gross pay.

use rust_decimal::Decimal;

use crate::models::{ContributionRates, Contributions};

/// Computes the statutory contributions owed on `gross_pay`.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::compute_contributions;
/// use paye_engine::models::ContributionRates;
/// use rust_decimal::Decimal;
///
/// let contributions = compute_contributions(Decimal::new(17000, 0), &ContributionRates::zra_2026());
/// assert_eq!(contributions.napsa, Decimal::new(850, 0));
/// assert_eq!(contributions.nhima, Decimal::new(170, 0));
/// assert_eq!(contributions.total, Decimal::new(1020, 0));
/// ```
pub fn compute_contributions(gross_pay: Decimal, rates: &ContributionRates) -> Contributions {
    let napsa = gross_pay * rates.napsa;
    let nhima = gross_pay * rates.nhima;

    Contributions {
        napsa,
        nhima,
        total: napsa.saturating_add(nhima),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_gross_pay_has_no_contributions() {
        let result = compute_contributions(Decimal::ZERO, &ContributionRates::zra_2026());
        assert_eq!(result.napsa, Decimal::ZERO);
        assert_eq!(result.nhima, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_gross_pay() {
        let result = compute_contributions(dec("1234.56"), &ContributionRates::zra_2026());
        assert_eq!(result.napsa, dec("61.728"));
        assert_eq!(result.nhima, dec("12.3456"));
        assert_eq!(result.total, dec("74.0736"));
    }

    #[test]
    fn test_alternate_rates() {
        let rates = ContributionRates::new(dec("0.075"), dec("0.02")).unwrap();
        let result = compute_contributions(dec("10000"), &rates);
        assert_eq!(result.napsa, dec("750"));
        assert_eq!(result.nhima, dec("200"));
        assert_eq!(result.total, dec("950"));
    }

    #[test]
    fn test_total_saturates_on_huge_gross_pay() {
        let rates = ContributionRates::new(dec("0.9"), dec("0.9")).unwrap();
        let result = compute_contributions(Decimal::MAX, &rates);
        assert!(result.napsa < Decimal::MAX);
        assert_eq!(result.total, Decimal::MAX);
    }
}
