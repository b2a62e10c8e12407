//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax year
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{ContributionRates, TaxTable};

use super::types::{BandsFile, TaxYearConfig, TaxYearFile, TaxYearMetadata};

/// Loads and provides access to a tax year configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates the bracket table and contribution rates, and fails if either
/// is malformed. A successfully loaded configuration is always safe to
/// calculate with.
///
/// # Directory Structure
///
/// ```text
/// config/zra_2026/
/// ├── tax_year.yaml   # Tax year metadata and contribution rates
/// └── bands.yaml      # Ordered PAYE brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/zra_2026")?;
/// println!("Loaded tax year: {}", loader.tax_year().name);
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TaxYearConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/zra_2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - The brackets violate the table invariants (`InvalidBracketTable`)
    /// - A contribution rate is outside `[0, 1)` (`InvalidContributionRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax_year_file = Self::load_yaml::<TaxYearFile>(&path.join("tax_year.yaml"))?;
        let bands_file = Self::load_yaml::<BandsFile>(&path.join("bands.yaml"))?;

        let config = Self::validate(
            tax_year_file.tax_year,
            tax_year_file.contributions,
            bands_file,
        )?;

        info!(
            code = %config.tax_year().code,
            bands = config.tax_table().len(),
            path = %path.display(),
            "Tax year configuration loaded"
        );

        Ok(Self { config })
    }

    /// Wraps an in-memory configuration, such as [`TaxYearConfig::zra_2026`].
    pub fn from_config(config: TaxYearConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(
        metadata: TaxYearMetadata,
        contributions: ContributionRates,
        bands: BandsFile,
    ) -> EngineResult<TaxYearConfig> {
        contributions.validate()?;
        let tax_table = TaxTable::new(bands.bands)?;
        Ok(TaxYearConfig::new(metadata, contributions, tax_table))
    }

    /// Returns the underlying tax year configuration.
    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Returns the tax year metadata.
    pub fn tax_year(&self) -> &TaxYearMetadata {
        self.config.tax_year()
    }

    /// Returns the validated bracket table.
    pub fn tax_table(&self) -> &TaxTable {
        self.config.tax_table()
    }

    /// Returns the statutory contribution rates.
    pub fn contribution_rates(&self) -> &ContributionRates {
        self.config.contributions()
    }
}
