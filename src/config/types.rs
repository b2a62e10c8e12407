//! Configuration types for a PAYE tax year.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionRates, TaxBracket, TaxTable};

/// Metadata about the tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearMetadata {
    /// Short identifier for the tax year (e.g., "ZRA-PAYE-2026").
    pub code: String,
    /// The human-readable name of the tax year.
    pub name: String,
    /// Symbol prefixed to formatted money amounts (e.g., "K").
    pub currency_symbol: String,
    /// The date from which these bands and rates apply.
    pub effective_date: NaiveDate,
    /// URL to the authority publishing the rates.
    pub source_url: String,
}

/// Structure of `tax_year.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearFile {
    /// Tax year metadata.
    pub tax_year: TaxYearMetadata,
    /// Statutory contribution rates.
    pub contributions: ContributionRates,
}

/// Structure of `bands.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BandsFile {
    /// Brackets in ascending order of lower bound.
    pub bands: Vec<TaxBracket>,
}

/// The complete, validated configuration for one tax year.
///
/// Built once at startup and shared read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxYearConfig {
    /// Tax year metadata.
    metadata: TaxYearMetadata,
    /// Statutory contribution rates.
    contributions: ContributionRates,
    /// The validated bracket table.
    tax_table: TaxTable,
}

impl TaxYearConfig {
    /// Creates a TaxYearConfig from its already validated parts.
    pub fn new(
        metadata: TaxYearMetadata,
        contributions: ContributionRates,
        tax_table: TaxTable,
    ) -> Self {
        Self {
            metadata,
            contributions,
            tax_table,
        }
    }

    /// The built-in Zambia Revenue Authority configuration for 2026.
    pub fn zra_2026() -> Self {
        Self {
            metadata: TaxYearMetadata {
                code: "ZRA-PAYE-2026".to_string(),
                name: "Zambia Revenue Authority PAYE 2026".to_string(),
                currency_symbol: "K".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2026, 1, 1)
                    .expect("2026-01-01 is a valid date"),
                source_url: "https://www.zra.org.zm".to_string(),
            },
            contributions: ContributionRates::zra_2026(),
            tax_table: TaxTable::zra_2026(),
        }
    }

    /// Returns the tax year metadata.
    pub fn tax_year(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the statutory contribution rates.
    pub fn contributions(&self) -> &ContributionRates {
        &self.contributions
    }

    /// Returns the bracket table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }
}
