//! Domain models for the PAYE engine.
//!
//! This module contains the bracket table and tax result types used by the
//! progressive tax calculation, and the payroll input and result types used by
//! the payroll aggregator.

mod payroll;
mod tax_bracket;

pub use payroll::{
    ContributionRates, Contributions, PayrollInputs, PayrollResult, max_payroll_input,
};
pub use tax_bracket::{BandResult, TaxBracket, TaxResult, TaxTable};
