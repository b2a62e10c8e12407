//! Calculation logic for the PAYE engine.
//!
//! This module contains the progressive tax calculation over a bracket table,
//! the statutory contribution calculation, and the payroll aggregation that
//! combines them into gross pay, total deductions and net salary.

mod contributions;
mod payroll;
mod progressive_tax;

pub use contributions::compute_contributions;
pub use payroll::compute_payroll;
pub use progressive_tax::compute_progressive_tax;
