//! Tabular ingestion records.
//!
//! Rows arrive from CSV (or any serde source) as loosely-populated records
//! keyed by the dashboard column headers. They are checked once here and
//! converted into the strongly-typed instruments the calculators use.
//!
//! Required column sets:
//! - balance sheet: `product, side, amount, rate, maturityMonths`
//! - derivatives: `instrument, notional, productType, maturityMonths, currentMTM`

use crate::error::{AlmError, AlmResult};
use crate::types::{BalanceSheetInstrument, DerivativeInstrument, ProductType, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A column accepted by a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Contract name of the field.
    pub field: &'static str,
    /// Header used by the dashboard export.
    pub header: &'static str,
    /// Whether the column must be present.
    pub required: bool,
}

impl ColumnSpec {
    const fn required(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            required: true,
        }
    }

    const fn optional(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            required: false,
        }
    }

    /// Returns true if a header names this column.
    #[must_use]
    pub fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        header == self.header || header == self.field
    }
}

/// Columns of a balance-sheet file.
pub const BALANCE_SHEET_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required("product", "Product"),
    ColumnSpec::required("side", "Type"),
    ColumnSpec::required("amount", "Amount ($)"),
    ColumnSpec::required("rate", "Rate (%)"),
    ColumnSpec::optional("duration", "Duration (Years)"),
    ColumnSpec::required("maturityMonths", "Maturity (Months)"),
];

/// Columns of a derivatives book file.
pub const DERIVATIVE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::required("instrument", "Instrument"),
    ColumnSpec::required("notional", "Notional ($)"),
    ColumnSpec::required("maturityMonths", "Maturity (Months)"),
    ColumnSpec::required("productType", "Type"),
    ColumnSpec::required("currentMTM", "MTM ($)"),
    ColumnSpec::optional("strikeRate", "Strike (%)"),
    ColumnSpec::optional("delta", "Delta"),
];

/// Checks that every required column is present in a header row.
///
/// # Errors
///
/// Returns [`AlmError::Schema`] naming the first missing required column.
pub fn check_headers<S: AsRef<str>>(columns: &[ColumnSpec], headers: &[S]) -> AlmResult<()> {
    for column in columns.iter().filter(|c| c.required) {
        if !headers.iter().any(|h| column.matches(h.as_ref())) {
            return Err(AlmError::missing_column(column.header));
        }
    }
    Ok(())
}

fn required<T>(value: Option<T>, column: &str) -> AlmResult<T> {
    value.ok_or_else(|| AlmError::schema(column, "missing value"))
}

/// One balance-sheet row as read from tabular input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetRecord {
    /// Product name.
    #[serde(rename = "Product", alias = "product")]
    pub product: Option<String>,

    /// "Asset" or "Liability".
    #[serde(rename = "Type", alias = "side")]
    pub side: Option<String>,

    /// Balance.
    #[serde(rename = "Amount ($)", alias = "amount")]
    pub amount: Option<Decimal>,

    /// Rate in percent.
    #[serde(rename = "Rate (%)", alias = "rate")]
    pub rate: Option<f64>,

    /// Duration in years.
    #[serde(rename = "Duration (Years)", alias = "duration", default)]
    pub duration: Option<f64>,

    /// Maturity in months.
    #[serde(rename = "Maturity (Months)", alias = "maturityMonths")]
    pub maturity_months: Option<f64>,
}

impl TryFrom<BalanceSheetRecord> for BalanceSheetInstrument {
    type Error = AlmError;

    fn try_from(record: BalanceSheetRecord) -> Result<Self, Self::Error> {
        let side: Side = required(record.side, "Type")?.parse()?;
        BalanceSheetInstrument::builder()
            .product(required(record.product, "Product")?)
            .side(side)
            .amount(required(record.amount, "Amount ($)")?)
            .rate(required(record.rate, "Rate (%)")?)
            .maybe_duration(record.duration)
            .maturity_months(required(record.maturity_months, "Maturity (Months)")?)
            .build()
    }
}

impl From<&BalanceSheetInstrument> for BalanceSheetRecord {
    fn from(inst: &BalanceSheetInstrument) -> Self {
        Self {
            product: Some(inst.product.clone()),
            side: Some(inst.side.label().to_string()),
            amount: Some(inst.amount),
            rate: Some(inst.rate),
            duration: inst.duration,
            maturity_months: Some(inst.maturity_months),
        }
    }
}

/// One derivatives-book row as read from tabular input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivativeRecord {
    /// Instrument name.
    #[serde(rename = "Instrument", alias = "instrument")]
    pub instrument: Option<String>,

    /// Notional.
    #[serde(rename = "Notional ($)", alias = "notional")]
    pub notional: Option<Decimal>,

    /// Maturity in months.
    #[serde(rename = "Maturity (Months)", alias = "maturityMonths")]
    pub maturity_months: Option<f64>,

    /// "Interest Rate" or "FX".
    #[serde(rename = "Type", alias = "productType")]
    pub product_type: Option<String>,

    /// Current MTM.
    #[serde(rename = "MTM ($)", alias = "currentMTM")]
    pub current_mtm: Option<Decimal>,

    /// Strike rate in percent.
    #[serde(rename = "Strike (%)", alias = "strikeRate", default)]
    pub strike_rate: Option<f64>,

    /// Delta.
    #[serde(rename = "Delta", alias = "delta", default)]
    pub delta: Option<f64>,
}

impl TryFrom<DerivativeRecord> for DerivativeInstrument {
    type Error = AlmError;

    fn try_from(record: DerivativeRecord) -> Result<Self, Self::Error> {
        let product_type: ProductType = required(record.product_type, "Type")?.parse()?;
        DerivativeInstrument::builder()
            .instrument(required(record.instrument, "Instrument")?)
            .notional(required(record.notional, "Notional ($)")?)
            .product_type(product_type)
            .maybe_strike_rate(record.strike_rate)
            .maturity_months(required(record.maturity_months, "Maturity (Months)")?)
            .current_mtm(required(record.current_mtm, "MTM ($)")?)
            .maybe_delta(record.delta)
            .build()
    }
}

/// Converts balance-sheet records, reporting the failing row.
///
/// # Errors
///
/// Returns the first conversion error, with the 1-based row number in the reason.
pub fn balance_sheet_from_records(
    records: Vec<BalanceSheetRecord>,
) -> AlmResult<Vec<BalanceSheetInstrument>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| BalanceSheetInstrument::try_from(r).map_err(|e| with_row(e, i + 1)))
        .collect()
}

/// Converts derivative records, reporting the failing row.
///
/// # Errors
///
/// Returns the first conversion error, with the 1-based row number in the reason.
pub fn derivatives_from_records(
    records: Vec<DerivativeRecord>,
) -> AlmResult<Vec<DerivativeInstrument>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| DerivativeInstrument::try_from(r).map_err(|e| with_row(e, i + 1)))
        .collect()
}

fn with_row(err: AlmError, row: usize) -> AlmError {
    match err {
        AlmError::Schema { column, reason } => AlmError::Schema {
            column,
            reason: format!("row {row}: {reason}"),
        },
        AlmError::InvalidInput { reason } => AlmError::InvalidInput {
            reason: format!("row {row}: {reason}"),
        },
        other => other,
    }
}
