//! Per-product balance sensitivity to rate moves.

use crate::error::{AlmError, AlmResult};
use crate::limits::{check_bounded, MAX_SENSITIVITY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a sensitivity lookup treats products missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityPolicy {
    /// Unknown products get a coefficient of zero.
    #[default]
    ZeroFallback,
    /// Unknown products are rejected.
    Strict,
}

/// Mapping from product name to the fractional balance change per 100bps.
///
/// A coefficient of `-0.01` means the balance shrinks by 1% for every
/// +100bps of rate shift. Keys match exactly (case and whitespace matter).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, f64>", into = "HashMap<String, f64>")]
pub struct RateSensitivityTable {
    coefficients: HashMap<String, f64>,
}

impl RateSensitivityTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from product/coefficient pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if a coefficient is non-finite or
    /// larger in magnitude than [`MAX_SENSITIVITY`].
    pub fn from_pairs(pairs: &[(&str, f64)]) -> AlmResult<Self> {
        let mut table = Self::new();
        for (product, coefficient) in pairs {
            table.insert(*product, *coefficient)?;
        }
        Ok(table)
    }

    /// The behavioural sensitivities used for the sample balance sheet.
    #[must_use]
    pub fn standard() -> Self {
        let coefficients = [
            ("Fixed Mortgage", -0.01),
            ("HELOC", 0.005),
            ("Commercial Loan", -0.002),
            ("Investment Securities", 0.0),
            ("Core Checking", 0.001),
            ("Savings Account", 0.002),
            ("Time Deposits", 0.004),
            ("FHLB Advances", 0.0),
            ("Fed Funds Purchased", 0.0),
        ];
        Self {
            coefficients: coefficients
                .iter()
                .map(|(p, c)| ((*p).to_string(), *c))
                .collect(),
        }
    }

    /// Adds or replaces a coefficient.
    ///
    /// # Errors
    ///
    /// See [`RateSensitivityTable::insert`].
    pub fn with(mut self, product: impl Into<String>, coefficient: f64) -> AlmResult<Self> {
        self.insert(product, coefficient)?;
        Ok(self)
    }

    /// Adds or replaces a coefficient in place.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if the coefficient is non-finite or
    /// larger in magnitude than [`MAX_SENSITIVITY`].
    pub fn insert(&mut self, product: impl Into<String>, coefficient: f64) -> AlmResult<()> {
        let product = product.into();
        check_bounded(
            &format!("rate sensitivity for '{product}'"),
            coefficient,
            MAX_SENSITIVITY,
        )?;
        self.coefficients.insert(product, coefficient);
        Ok(())
    }

    /// Returns the coefficient if the product is present.
    #[must_use]
    pub fn lookup(&self, product: &str) -> Option<f64> {
        self.coefficients.get(product).copied()
    }

    /// Returns true if the product has an explicit entry.
    #[must_use]
    pub fn contains(&self, product: &str) -> bool {
        self.coefficients.contains_key(product)
    }

    /// Total lookup: products absent from the table get zero.
    #[must_use]
    pub fn sensitivity(&self, product: &str) -> f64 {
        self.lookup(product).unwrap_or(0.0)
    }

    /// Lookup honouring the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] under [`SensitivityPolicy::Strict`]
    /// when the product has no entry.
    pub fn sensitivity_with(&self, product: &str, policy: SensitivityPolicy) -> AlmResult<f64> {
        match (self.lookup(product), policy) {
            (Some(c), _) => Ok(c),
            (None, SensitivityPolicy::ZeroFallback) => Ok(0.0),
            (None, SensitivityPolicy::Strict) => Err(AlmError::invalid_input(format!(
                "no rate sensitivity for product '{product}'"
            ))),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl TryFrom<HashMap<String, f64>> for RateSensitivityTable {
    type Error = AlmError;

    fn try_from(coefficients: HashMap<String, f64>) -> AlmResult<Self> {
        let mut table = Self::new();
        for (product, coefficient) in coefficients {
            table.insert(product, coefficient)?;
        }
        Ok(table)
    }
}

impl From<RateSensitivityTable> for HashMap<String, f64> {
    fn from(table: RateSensitivityTable) -> Self {
        table.coefficients
    }
}
