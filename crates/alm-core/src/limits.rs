//! Input bounds enforced at construction.
//!
//! Calculators add and multiply balances as `Decimal`, whose magnitude tops
//! out near 7.9e28. With every input inside these bounds, per-instrument
//! products stay below 1e20 and a balance sheet would need billions of
//! lines before any sum left the representable range.

use crate::error::{AlmError, AlmResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest balance, notional or MTM magnitude (one quadrillion).
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000);

/// Longest maturity in months (1,000 years).
pub const MAX_MATURITY_MONTHS: f64 = 12_000.0;

/// Longest duration in years.
pub const MAX_DURATION_YEARS: f64 = 1_000.0;

/// Largest rate magnitude in percent, for instrument, strike and FTP rates.
pub const MAX_RATE_PCT: f64 = 1_000.0;

/// Largest sensitivity coefficient magnitude.
pub const MAX_SENSITIVITY: f64 = 10.0;

/// Largest scenario shift or book shock magnitude in percent.
pub const MAX_SHIFT_PCT: f64 = 100.0;

/// Largest derivative delta magnitude.
pub const MAX_DELTA: f64 = 100.0;

/// Checks that a money value lies within `±MAX_AMOUNT`.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] naming `what` when out of range.
pub fn check_amount(what: &str, value: Decimal) -> AlmResult<()> {
    if value.abs() > MAX_AMOUNT {
        return Err(AlmError::invalid_input(format!(
            "{what} {value} exceeds the supported magnitude {MAX_AMOUNT}"
        )));
    }
    Ok(())
}

/// Checks that a value is finite and within `±max`.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] naming `what` when non-finite or out
/// of range.
pub fn check_bounded(what: &str, value: f64, max: f64) -> AlmResult<()> {
    if !value.is_finite() {
        return Err(AlmError::invalid_input(format!("{what} must be finite")));
    }
    if value.abs() > max {
        return Err(AlmError::invalid_input(format!(
            "{what} {value} exceeds the supported magnitude {max}"
        )));
    }
    Ok(())
}
