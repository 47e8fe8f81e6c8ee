//! Derivatives book: shock revaluation and summary.
//!
//! Shocks use linear approximations:
//!
//! ```text
//! ΔMTM_IRR = notional × (irr_shock/100) × (maturity_months/12) × 0.01
//! ΔMTM_FX  = notional × fx_shock / 100
//! ```
//!
//! Interest rate positions take only the IRR shock and FX positions only the
//! FX shock. Both shocks are given in percent.

use crate::numeric::{pct_of, to_decimal};
use crate::parallel::maybe_parallel_map;
use alm_core::limits::{check_bounded, MAX_SHIFT_PCT};
use alm_core::{AlmConfig, AlmResult, DerivativeInstrument, ProductType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shocks applied to the book, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BookShock {
    /// Parallel interest rate shock.
    pub irr_shock_pct: f64,
    /// FX spot shock.
    pub fx_shock_pct: f64,
}

impl BookShock {
    /// Creates a shock.
    #[must_use]
    pub fn new(irr_shock_pct: f64, fx_shock_pct: f64) -> Self {
        Self {
            irr_shock_pct,
            fx_shock_pct,
        }
    }

    /// Checks both shocks are finite and within [`MAX_SHIFT_PCT`].
    ///
    /// # Errors
    ///
    /// Returns [`alm_core::AlmError::InvalidInput`] naming the offending shock.
    pub fn validate(&self) -> AlmResult<()> {
        check_bounded("IRR shock", self.irr_shock_pct, MAX_SHIFT_PCT)?;
        check_bounded("FX shock", self.fx_shock_pct, MAX_SHIFT_PCT)
    }
}

/// One shocked position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockedPosition {
    /// Instrument name.
    pub instrument: String,
    /// Risk class.
    pub product_type: ProductType,
    /// Notional.
    pub notional: Decimal,
    /// Maturity in months.
    pub maturity_months: f64,
    /// MTM before the shock.
    pub current_mtm: Decimal,
    /// Change from the rate shock.
    pub delta_mtm_irr: Decimal,
    /// Change from the FX shock.
    pub delta_mtm_fx: Decimal,
    /// `delta_mtm_irr + delta_mtm_fx`.
    pub total_delta_mtm: Decimal,
    /// `current_mtm + total_delta_mtm`.
    pub new_mtm: Decimal,
}

/// Shocked book with totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShockReport {
    /// Shocks applied.
    pub shock: BookShock,
    /// One row per position, in book order.
    pub positions: Vec<ShockedPosition>,
    /// Sum of current MTM.
    pub total_current_mtm: Decimal,
    /// Sum of shocked MTM.
    pub total_new_mtm: Decimal,
    /// Sum of MTM changes.
    pub total_delta_mtm: Decimal,
}

/// Revalues one position.
///
/// # Errors
///
/// Returns [`alm_core::AlmError::InvalidInput`] if a shock is out of range.
pub fn shock_position(
    position: &DerivativeInstrument,
    shock: &BookShock,
) -> AlmResult<ShockedPosition> {
    shock.validate()?;
    Ok(revalue(position, shock))
}

fn revalue(position: &DerivativeInstrument, shock: &BookShock) -> ShockedPosition {
    let (delta_mtm_irr, delta_mtm_fx) = match position.product_type {
        ProductType::InterestRate => {
            let years = to_decimal(position.maturity_months) / Decimal::from(12);
            let irr = pct_of(position.notional, shock.irr_shock_pct) * years / Decimal::ONE_HUNDRED;
            (irr, Decimal::ZERO)
        }
        ProductType::FX => (Decimal::ZERO, pct_of(position.notional, shock.fx_shock_pct)),
    };
    let total = delta_mtm_irr + delta_mtm_fx;
    ShockedPosition {
        instrument: position.instrument.clone(),
        product_type: position.product_type,
        notional: position.notional,
        maturity_months: position.maturity_months,
        current_mtm: position.current_mtm,
        delta_mtm_irr,
        delta_mtm_fx,
        total_delta_mtm: total,
        new_mtm: position.current_mtm + total,
    }
}

/// Revalues the whole book.
///
/// # Errors
///
/// Returns [`alm_core::AlmError::InvalidInput`] if a shock is not finite or exceeds
/// [`MAX_SHIFT_PCT`].
pub fn shock_book(
    book: &[DerivativeInstrument],
    shock: BookShock,
    config: &AlmConfig,
) -> AlmResult<ShockReport> {
    shock.validate()?;
    let positions = maybe_parallel_map(book, config, |p| revalue(p, &shock));

    let report = ShockReport {
        total_current_mtm: positions.iter().map(|p| p.current_mtm).sum(),
        total_new_mtm: positions.iter().map(|p| p.new_mtm).sum(),
        total_delta_mtm: positions.iter().map(|p| p.total_delta_mtm).sum(),
        shock,
        positions,
    };
    tracing::debug!(
        positions = report.positions.len(),
        irr_shock = shock.irr_shock_pct,
        fx_shock = shock.fx_shock_pct,
        delta = %report.total_delta_mtm,
        "shocked derivatives book"
    );
    Ok(report)
}

/// Snapshot of the book's size and exposure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    /// Number of positions.
    pub positions: usize,
    /// Sum of notionals.
    pub total_notional: Decimal,
    /// Sum of MTM.
    pub total_mtm: Decimal,
    /// Notional by risk class.
    pub notional_by_type: BTreeMap<ProductType, Decimal>,
    /// MTM by risk class.
    pub mtm_by_type: BTreeMap<ProductType, Decimal>,
    /// `Σ notional × delta` over positions carrying a delta.
    pub delta_weighted_notional: Decimal,
}

/// Summarizes the book.
#[must_use]
pub fn summarize_book(book: &[DerivativeInstrument]) -> BookSummary {
    book.iter().fold(
        BookSummary {
            positions: book.len(),
            ..BookSummary::default()
        },
        |mut s, p| {
            s.total_notional += p.notional;
            s.total_mtm += p.current_mtm;
            *s.notional_by_type.entry(p.product_type).or_default() += p.notional;
            *s.mtm_by_type.entry(p.product_type).or_default() += p.current_mtm;
            if let Some(delta) = p.delta {
                s.delta_weighted_notional += p.notional * to_decimal(delta);
            }
            s
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alm_core::limits::{MAX_AMOUNT, MAX_MATURITY_MONTHS};
    use alm_core::{sample, AlmError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_irs_shock() {
        let book = sample::derivatives_book().unwrap();
        let irs = shock_position(&book[0], &BookShock::new(1.0, 5.0)).unwrap();
        // 10M × 1% × 5y × 0.01
        assert_eq!(irs.delta_mtm_irr, dec!(5_000));
        assert_eq!(irs.delta_mtm_fx, Decimal::ZERO);
        assert_eq!(irs.new_mtm, dec!(255_000));
    }

    #[test]
    fn test_fx_shock_in_percent() {
        let book = sample::derivatives_book().unwrap();
        let fwd = shock_position(&book[3], &BookShock::new(1.0, 5.0)).unwrap();
        assert_eq!(fwd.delta_mtm_irr, Decimal::ZERO);
        assert_eq!(fwd.delta_mtm_fx, dec!(150_000));
        assert_eq!(fwd.new_mtm, dec!(165_000));
    }

    #[test]
    fn test_book_totals() {
        let book = sample::derivatives_book().unwrap();
        let report = shock_book(&book, BookShock::new(1.0, -2.0), &AlmConfig::default()).unwrap();

        // IRR: 5,000 + 5M×1%×3×1% = 1,500 + 2M×1%×2×1% = 400
        // FX: -60,000 - 80,000
        assert_eq!(report.total_delta_mtm, dec!(-133_100));
        assert_eq!(report.total_current_mtm, dec!(365_000));
        assert_eq!(report.total_new_mtm, dec!(231_900));
    }

    #[test]
    fn test_zero_shock() {
        let book = sample::derivatives_book().unwrap();
        let report = shock_book(&book, BookShock::default(), &AlmConfig::default()).unwrap();
        assert!(report.positions.iter().all(|p| p.new_mtm == p.current_mtm));
    }

    #[test]
    fn test_non_finite_shock() {
        assert!(shock_book(&[], BookShock::new(f64::NAN, 0.0), &AlmConfig::default()).is_err());
    }

    #[test]
    fn test_shock_bounds() {
        let book = sample::derivatives_book().unwrap();
        let config = AlmConfig::default();
        assert!(shock_book(&book, BookShock::new(MAX_SHIFT_PCT, -MAX_SHIFT_PCT), &config).is_ok());
        assert!(matches!(
            shock_book(&book, BookShock::new(0.0, 1e20), &config),
            Err(AlmError::InvalidInput { .. })
        ));
        assert!(shock_position(&book[0], &BookShock::new(1e30, 0.0)).is_err());
    }

    #[test]
    fn test_max_notional_revalues() {
        let position = DerivativeInstrument::builder()
            .instrument("IRS")
            .notional(MAX_AMOUNT)
            .product_type(ProductType::InterestRate)
            .maturity_months(MAX_MATURITY_MONTHS)
            .current_mtm(-MAX_AMOUNT)
            .build()
            .unwrap();
        let book = vec![position.clone(), position];
        let report = shock_book(
            &book,
            BookShock::new(MAX_SHIFT_PCT, MAX_SHIFT_PCT),
            &AlmConfig::default(),
        )
        .unwrap();
        // 1e15 × 100% × 1000y × 1%, twice
        assert_eq!(report.total_delta_mtm, dec!(20_000_000_000_000_000));
    }

    #[test]
    fn test_summary() {
        let book = sample::derivatives_book().unwrap();
        let summary = summarize_book(&book);
        assert_eq!(summary.positions, 5);
        assert_eq!(summary.total_notional, dec!(24_000_000));
        assert_eq!(summary.total_mtm, dec!(365_000));
        assert_eq!(summary.notional_by_type[&ProductType::FX], dec!(7_000_000));
        assert_eq!(
            summary.mtm_by_type[&ProductType::InterestRate],
            dec!(330_000)
        );
        // 8M + 2.5M + 1.2M + 2.1M + 2.6M
        assert_eq!(summary.delta_weighted_notional, dec!(16_400_000));
    }
}
