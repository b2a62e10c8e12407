//! Configuration loading and management for the PAYE engine.
//!
//! This module loads a tax year configuration (metadata, statutory
//! contribution rates and PAYE brackets) from YAML files and validates it
//! before any calculation can use it.
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/zra_2026").unwrap();
//! println!("Loaded tax year: {}", config.tax_year().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BandsFile, TaxYearConfig, TaxYearFile, TaxYearMetadata};
