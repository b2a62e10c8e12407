//! Error types for the PAYE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculations themselves never fail; every variant here describes a
//! configuration problem detected while loading or validating a tax year.

use thiserror::Error;

/// The main error type for the PAYE engine.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/bands.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/bands.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The tax bracket table violates an ordering or bounds invariant.
    #[error("Invalid tax bracket at index {index}: {message}")]
    InvalidBracketTable {
        /// Zero-based position of the offending bracket.
        index: usize,
        /// A description of the violated invariant.
        message: String,
    },

    /// A statutory contribution rate is outside the permitted range.
    #[error("Invalid contribution rate '{field}': {message}")]
    InvalidContributionRate {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the rate invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
