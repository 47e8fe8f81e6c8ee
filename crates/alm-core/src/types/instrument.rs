//! Balance-sheet instrument representation.

use crate::error::{AlmError, AlmResult};
use crate::limits::{
    check_amount, check_bounded, MAX_DURATION_YEARS, MAX_MATURITY_MONTHS, MAX_RATE_PCT,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side of the balance sheet an instrument sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    /// Asset (cash inflow, interest income).
    Asset,
    /// Liability (cash outflow, interest expense).
    Liability,
}

impl Side {
    /// Returns the label for this side.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Asset => "Asset",
            Self::Liability => "Liability",
        }
    }

    /// Returns +1 for assets and -1 for liabilities.
    #[must_use]
    pub fn sign(&self) -> Decimal {
        match self {
            Self::Asset => Decimal::ONE,
            Self::Liability => Decimal::NEGATIVE_ONE,
        }
    }

    /// Returns both sides in reporting order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Asset, Self::Liability]
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Side {
    type Err = AlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asset" | "assets" => Ok(Self::Asset),
            "liability" | "liabilities" => Ok(Self::Liability),
            other => Err(AlmError::schema(
                "Type",
                format!("unknown balance sheet side '{other}'"),
            )),
        }
    }
}

/// A single balance-sheet line.
///
/// Amounts are always stored non-negative; the [`Side`] carries the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetInstrument {
    /// Product name, also the key into the rate sensitivity table.
    pub product: String,

    /// Asset or liability.
    pub side: Side,

    /// Outstanding balance.
    pub amount: Decimal,

    /// Annual rate in percent (e.g. 4.0 for 4%).
    pub rate: f64,

    /// Duration in years, if known.
    pub duration: Option<f64>,

    /// Time to maturity in months.
    pub maturity_months: f64,
}

impl BalanceSheetInstrument {
    /// Creates a new instrument builder.
    #[must_use]
    pub fn builder() -> InstrumentBuilder {
        InstrumentBuilder::new()
    }

    /// Returns true for asset-side instruments.
    #[must_use]
    pub fn is_asset(&self) -> bool {
        self.side == Side::Asset
    }

    /// Returns true for liability-side instruments.
    #[must_use]
    pub fn is_liability(&self) -> bool {
        self.side == Side::Liability
    }

    /// Returns the duration, falling back to `default` when absent.
    #[must_use]
    pub fn duration_or(&self, default: f64) -> f64 {
        self.duration.unwrap_or(default)
    }

    /// Returns the amount as f64.
    #[must_use]
    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }

    /// Returns the amount signed by side (assets positive).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.amount * self.side.sign()
    }
}

/// Builder for constructing a [`BalanceSheetInstrument`].
#[derive(Debug, Clone, Default)]
pub struct InstrumentBuilder {
    product: Option<String>,
    side: Option<Side>,
    amount: Option<Decimal>,
    rate: Option<f64>,
    duration: Option<f64>,
    maturity_months: Option<f64>,
}

impl InstrumentBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the product name.
    #[must_use]
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Sets the balance sheet side.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Marks the instrument as an asset.
    #[must_use]
    pub fn asset(self) -> Self {
        self.side(Side::Asset)
    }

    /// Marks the instrument as a liability.
    #[must_use]
    pub fn liability(self) -> Self {
        self.side(Side::Liability)
    }

    /// Sets the outstanding amount.
    #[must_use]
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the annual rate in percent.
    #[must_use]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the duration in years.
    #[must_use]
    pub fn duration(mut self, years: f64) -> Self {
        self.duration = Some(years);
        self
    }

    /// Sets an optional duration in years.
    #[must_use]
    pub fn maybe_duration(mut self, years: Option<f64>) -> Self {
        self.duration = years;
        self
    }

    /// Sets the maturity in months.
    #[must_use]
    pub fn maturity_months(mut self, months: f64) -> Self {
        self.maturity_months = Some(months);
        self
    }

    /// Builds the instrument.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::Schema`] if a required field is missing and
    /// [`AlmError::InvalidInput`] if a value is out of range.
    pub fn build(self) -> AlmResult<BalanceSheetInstrument> {
        let product = self
            .product
            .ok_or_else(|| AlmError::missing_column("product"))?;
        let side = self.side.ok_or_else(|| AlmError::missing_column("side"))?;
        let amount = self
            .amount
            .ok_or_else(|| AlmError::missing_column("amount"))?;
        let rate = self.rate.ok_or_else(|| AlmError::missing_column("rate"))?;
        let maturity_months = self
            .maturity_months
            .ok_or_else(|| AlmError::missing_column("maturityMonths"))?;

        if amount < Decimal::ZERO {
            return Err(AlmError::invalid_input(format!(
                "{product}: amount must be non-negative, got {amount}"
            )));
        }
        check_amount(&format!("{product}: amount"), amount)?;
        if !maturity_months.is_finite() || maturity_months < 0.0 {
            return Err(AlmError::invalid_input(format!(
                "{product}: maturity must be a non-negative number of months, got {maturity_months}"
            )));
        }
        check_bounded(
            &format!("{product}: maturity"),
            maturity_months,
            MAX_MATURITY_MONTHS,
        )?;
        check_bounded(&format!("{product}: rate"), rate, MAX_RATE_PCT)?;
        if let Some(d) = self.duration {
            if !d.is_finite() || d < 0.0 {
                return Err(AlmError::invalid_input(format!(
                    "{product}: duration must be non-negative, got {d}"
                )));
            }
            check_bounded(&format!("{product}: duration"), d, MAX_DURATION_YEARS)?;
        }

        Ok(BalanceSheetInstrument {
            product,
            side,
            amount,
            rate,
            duration: self.duration,
            maturity_months,
        })
    }
}
