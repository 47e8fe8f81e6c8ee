//! Derivative position representation.

use crate::error::{AlmError, AlmResult};
use crate::limits::{
    check_amount, check_bounded, MAX_DELTA, MAX_MATURITY_MONTHS, MAX_RATE_PCT,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Risk class of a derivative position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductType {
    /// Interest rate derivative (swaps, caps, swaptions).
    InterestRate,
    /// FX derivative (forwards, swaps).
    FX,
}

impl ProductType {
    /// Returns the label for this product type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InterestRate => "Interest Rate",
            Self::FX => "FX",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ProductType {
    type Err = AlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "interestrate" | "ir" | "rates" => Ok(Self::InterestRate),
            "fx" => Ok(Self::FX),
            _ => Err(AlmError::schema(
                "Type",
                format!("unknown derivative product type '{}'", s.trim()),
            )),
        }
    }
}

/// A single derivative position in the IRR/FX book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeInstrument {
    /// Instrument name (e.g. "IRS", "FX Forward").
    pub instrument: String,

    /// Notional amount.
    pub notional: Decimal,

    /// Interest rate or FX.
    pub product_type: ProductType,

    /// Strike rate in percent. Absent for FX.
    pub strike_rate: Option<f64>,

    /// Time to maturity in months.
    pub maturity_months: f64,

    /// Current mark-to-market value (signed).
    pub current_mtm: Decimal,

    /// Delta exposure as a fraction of notional, if reported.
    pub delta: Option<f64>,
}

impl DerivativeInstrument {
    /// Creates a new derivative builder.
    #[must_use]
    pub fn builder() -> DerivativeBuilder {
        DerivativeBuilder::new()
    }

    /// Returns true for interest rate positions.
    #[must_use]
    pub fn is_interest_rate(&self) -> bool {
        self.product_type == ProductType::InterestRate
    }

    /// Returns true for FX positions.
    #[must_use]
    pub fn is_fx(&self) -> bool {
        self.product_type == ProductType::FX
    }

    /// Returns the maturity in years.
    #[must_use]
    pub fn maturity_years(&self) -> f64 {
        self.maturity_months / 12.0
    }
}

/// Builder for constructing a [`DerivativeInstrument`].
#[derive(Debug, Clone, Default)]
pub struct DerivativeBuilder {
    instrument: Option<String>,
    notional: Option<Decimal>,
    product_type: Option<ProductType>,
    strike_rate: Option<f64>,
    maturity_months: Option<f64>,
    current_mtm: Option<Decimal>,
    delta: Option<f64>,
}

impl DerivativeBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instrument name.
    #[must_use]
    pub fn instrument(mut self, name: impl Into<String>) -> Self {
        self.instrument = Some(name.into());
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: Decimal) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the product type.
    #[must_use]
    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    /// Sets the strike rate in percent.
    #[must_use]
    pub fn strike_rate(mut self, strike: f64) -> Self {
        self.strike_rate = Some(strike);
        self
    }

    /// Sets an optional strike rate.
    #[must_use]
    pub fn maybe_strike_rate(mut self, strike: Option<f64>) -> Self {
        self.strike_rate = strike;
        self
    }

    /// Sets the maturity in months.
    #[must_use]
    pub fn maturity_months(mut self, months: f64) -> Self {
        self.maturity_months = Some(months);
        self
    }

    /// Sets the current mark-to-market.
    #[must_use]
    pub fn current_mtm(mut self, mtm: Decimal) -> Self {
        self.current_mtm = Some(mtm);
        self
    }

    /// Sets the delta.
    #[must_use]
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Sets an optional delta.
    #[must_use]
    pub fn maybe_delta(mut self, delta: Option<f64>) -> Self {
        self.delta = delta;
        self
    }

    /// Builds the derivative.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::Schema`] if a required field is missing and
    /// [`AlmError::InvalidInput`] if a value is out of range.
    pub fn build(self) -> AlmResult<DerivativeInstrument> {
        let instrument = self
            .instrument
            .ok_or_else(|| AlmError::missing_column("instrument"))?;
        let notional = self
            .notional
            .ok_or_else(|| AlmError::missing_column("notional"))?;
        let product_type = self
            .product_type
            .ok_or_else(|| AlmError::missing_column("productType"))?;
        let maturity_months = self
            .maturity_months
            .ok_or_else(|| AlmError::missing_column("maturityMonths"))?;
        let current_mtm = self
            .current_mtm
            .ok_or_else(|| AlmError::missing_column("currentMTM"))?;

        if notional < Decimal::ZERO {
            return Err(AlmError::invalid_input(format!(
                "{instrument}: notional must be non-negative, got {notional}"
            )));
        }
        if !maturity_months.is_finite() || maturity_months < 0.0 {
            return Err(AlmError::invalid_input(format!(
                "{instrument}: maturity must be a non-negative number of months, got {maturity_months}"
            )));
        }
        check_amount(&format!("{instrument}: notional"), notional)?;
        check_amount(&format!("{instrument}: MTM"), current_mtm)?;
        check_bounded(
            &format!("{instrument}: maturity"),
            maturity_months,
            MAX_MATURITY_MONTHS,
        )?;
        if let Some(strike) = self.strike_rate {
            check_bounded(&format!("{instrument}: strike"), strike, MAX_RATE_PCT)?;
        }
        if let Some(delta) = self.delta {
            check_bounded(&format!("{instrument}: delta"), delta, MAX_DELTA)?;
        }

        // FX forwards carry no strike
        let strike_rate = match product_type {
            ProductType::InterestRate => self.strike_rate,
            ProductType::FX => None,
        };

        Ok(DerivativeInstrument {
            instrument,
            notional,
            product_type,
            strike_rate,
            maturity_months,
            current_mtm,
            delta: self.delta,
        })
    }
}
