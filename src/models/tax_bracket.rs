//! Tax bracket models for the PAYE engine.
//!
//! This module contains the [`TaxBracket`] record, the validated [`TaxTable`]
//! built from an ordered list of brackets, and the [`TaxResult`] produced by
//! the progressive tax calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A contiguous income range taxed at a single marginal rate.
///
/// Brackets are half-open `[lower_bound, upper_bound)`. A bracket without an
/// upper bound absorbs all remaining income.
///
/// # Example
///
/// ```
/// use paye_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::bounded(Decimal::new(5100, 0), Decimal::new(9200, 0), Decimal::new(20, 2));
/// assert_eq!(bracket.capacity(), Some(Decimal::new(4100, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The income at which this bracket starts (inclusive).
    pub lower_bound: Decimal,
    /// The income at which this bracket ends (exclusive), or `None` if unbounded.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied to income within this bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket covering `[lower_bound, upper_bound)`.
    pub fn bounded(lower_bound: Decimal, upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// Creates an open-ended bracket starting at `lower_bound`.
    pub fn unbounded(lower_bound: Decimal, rate: Decimal) -> Self {
        Self {
            lower_bound,
            upper_bound: None,
            rate,
        }
    }

    /// Returns the width of the bracket, or `None` for the unbounded bracket.
    pub fn capacity(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - self.lower_bound)
    }

    /// Returns true if this bracket has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}

/// An ordered, validated sequence of tax brackets.
///
/// A `TaxTable` can only be obtained through [`TaxTable::new`], which checks
/// every ordering and bounds invariant, or through one of the built-in
/// tables. Holding a `TaxTable` therefore guarantees that every unit of
/// income falls into exactly one bracket.
///
/// # Example
///
/// ```
/// use paye_engine::models::{TaxBracket, TaxTable};
/// use rust_decimal::Decimal;
///
/// let table = TaxTable::new(vec![
///     TaxBracket::bounded(Decimal::ZERO, Decimal::new(1000, 0), Decimal::ZERO),
///     TaxBracket::unbounded(Decimal::new(1000, 0), Decimal::new(10, 2)),
/// ])
/// .unwrap();
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Validates `brackets` and wraps them in a table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] naming the first bracket that:
    /// - leaves a gap or overlap with its predecessor (or, for the first
    ///   bracket, does not start at zero)
    /// - has an upper bound that is not above its lower bound
    /// - is unbounded without being last, or is last without being unbounded
    /// - has a rate outside `[0, 1)` or lower than the previous rate
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidBracketTable {
                index: 0,
                message: "table must contain at least one bracket".to_string(),
            });
        }

        let last_index = brackets.len() - 1;
        let mut previous: Option<&TaxBracket> = None;

        for (index, bracket) in brackets.iter().enumerate() {
            let invalid = |message: String| EngineError::InvalidBracketTable { index, message };

            match previous {
                None if !bracket.lower_bound.is_zero() => {
                    return Err(invalid(format!(
                        "first bracket must start at 0, found {}",
                        bracket.lower_bound
                    )));
                }
                Some(prev) if prev.upper_bound != Some(bracket.lower_bound) => {
                    return Err(invalid(format!(
                        "lower bound {} does not match previous upper bound {}",
                        bracket.lower_bound,
                        prev.upper_bound
                            .map_or_else(|| "(unbounded)".to_string(), |u| u.to_string())
                    )));
                }
                _ => {}
            }

            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(invalid(format!(
                        "upper bound {} must be greater than lower bound {}",
                        upper, bracket.lower_bound
                    )));
                }
                Some(_) if index == last_index => {
                    return Err(invalid("last bracket must be unbounded".to_string()));
                }
                None if index != last_index => {
                    return Err(invalid(
                        "only the last bracket may be unbounded".to_string(),
                    ));
                }
                _ => {}
            }

            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(invalid(format!("rate {} must be in [0, 1)", bracket.rate)));
            }

            if let Some(prev) = previous {
                if bracket.rate < prev.rate {
                    return Err(invalid(format!(
                        "rate {} is lower than previous rate {}",
                        bracket.rate, prev.rate
                    )));
                }
            }

            previous = Some(bracket);
        }

        Ok(Self { brackets })
    }

    /// The Zambia Revenue Authority PAYE bands for 2026.
    ///
    /// | Band | Income range     | Rate |
    /// |------|------------------|------|
    /// | 1    | 0 - 5,100        | 0%   |
    /// | 2    | 5,100 - 9,200    | 20%  |
    /// | 3    | 9,200 - 13,600   | 30%  |
    /// | 4    | above 13,600     | 37%  |
    pub fn zra_2026() -> Self {
        Self {
            brackets: vec![
                TaxBracket::bounded(Decimal::ZERO, Decimal::new(5100, 0), Decimal::ZERO),
                TaxBracket::bounded(
                    Decimal::new(5100, 0),
                    Decimal::new(9200, 0),
                    Decimal::new(20, 2),
                ),
                TaxBracket::bounded(
                    Decimal::new(9200, 0),
                    Decimal::new(13600, 0),
                    Decimal::new(30, 2),
                ),
                TaxBracket::unbounded(Decimal::new(13600, 0), Decimal::new(37, 2)),
            ],
        }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the number of brackets.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Always false for a validated table; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }
}

impl AsRef<[TaxBracket]> for TaxTable {
    fn as_ref(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

/// The portion of income that fell into one bracket and the tax it attracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandResult {
    /// Income assigned to this bracket.
    pub taxable_amount: Decimal,
    /// Tax owed on that income at the bracket's rate.
    pub tax_amount: Decimal,
}

impl BandResult {
    /// A band that received no income.
    pub fn zero() -> Self {
        Self {
            taxable_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
        }
    }
}

/// The outcome of a progressive tax calculation.
///
/// `bands` has exactly one entry per bracket of the table used, in the same
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Sum of the tax owed across every band.
    pub total_tax: Decimal,
    /// Per-bracket breakdown.
    pub bands: Vec<BandResult>,
}
