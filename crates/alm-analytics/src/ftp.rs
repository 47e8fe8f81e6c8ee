//! Funds transfer pricing.
//!
//! Each instrument is charged (or credited) the transfer rate for its
//! maturity, isolating product margin from funding cost:
//!
//! ```text
//! ftp_charge = amount × ftp_rate / 100
//! ftp_net    = amount × (rate − ftp_rate) / 100
//! ```

use crate::numeric::{pct_of, to_decimal};
use crate::parallel::maybe_parallel_map;
use alm_core::{AlmConfig, BalanceSheetInstrument, FtpCurve, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// FTP result for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtpResult {
    /// Product name.
    pub product: String,
    /// Balance-sheet side.
    pub side: Side,
    /// Balance.
    pub amount: Decimal,
    /// Instrument rate in percent.
    pub rate: f64,
    /// Maturity in months.
    pub maturity_months: f64,
    /// Transfer rate in percent.
    pub ftp_rate: f64,
    /// `amount × ftp_rate / 100`.
    pub ftp_charge: Decimal,
    /// `amount × (rate − ftp_rate) / 100`.
    pub ftp_net: Decimal,
}

/// Net FTP contribution by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FtpSummary {
    /// Sum of `ftp_net` over assets.
    pub assets: Decimal,
    /// Sum of `ftp_net` over liabilities.
    pub liabilities: Decimal,
    /// Sum of `ftp_net` over all instruments.
    pub total: Decimal,
}

/// Per-instrument FTP results with their side summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtpReport {
    /// One result per instrument, in input order.
    pub results: Vec<FtpResult>,
    /// Contribution by side.
    pub summary: FtpSummary,
}

/// Prices one instrument against the curve.
#[must_use]
pub fn price_instrument(instrument: &BalanceSheetInstrument, curve: &FtpCurve) -> FtpResult {
    let ftp_rate = curve.rate_for(instrument.maturity_months);
    if curve.extrapolates(instrument.maturity_months) {
        tracing::warn!(
            product = %instrument.product,
            maturity_months = instrument.maturity_months,
            last_threshold = curve.last_threshold(),
            "maturity beyond FTP curve, using last rate"
        );
    }
    let spread = to_decimal(instrument.rate) - to_decimal(ftp_rate);
    FtpResult {
        product: instrument.product.clone(),
        side: instrument.side,
        amount: instrument.amount,
        rate: instrument.rate,
        maturity_months: instrument.maturity_months,
        ftp_rate,
        ftp_charge: pct_of(instrument.amount, ftp_rate),
        ftp_net: instrument.amount * spread / Decimal::ONE_HUNDRED,
    }
}

/// Aggregates `ftp_net` by side.
#[must_use]
pub fn summarize(results: &[FtpResult]) -> FtpSummary {
    results.iter().fold(FtpSummary::default(), |mut s, r| {
        match r.side {
            Side::Asset => s.assets += r.ftp_net,
            Side::Liability => s.liabilities += r.ftp_net,
        }
        s.total += r.ftp_net;
        s
    })
}

/// Prices every instrument and summarizes the contribution by side.
#[must_use]
pub fn ftp_analysis(
    instruments: &[BalanceSheetInstrument],
    curve: &FtpCurve,
    config: &AlmConfig,
) -> FtpReport {
    let results = maybe_parallel_map(instruments, config, |i| price_instrument(i, curve));
    let summary = summarize(&results);
    tracing::debug!(instruments = results.len(), total = %summary.total, "computed FTP");
    FtpReport { results, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alm_core::limits::{MAX_AMOUNT, MAX_MATURITY_MONTHS, MAX_RATE_PCT};
    use alm_core::sample;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mortgage_margin() {
        let mortgage = BalanceSheetInstrument::builder()
            .product("Fixed Mortgage")
            .asset()
            .amount(dec!(5_500_000))
            .rate(4.0)
            .maturity_months(60.0)
            .build()
            .unwrap();

        let result = price_instrument(&mortgage, &FtpCurve::standard());
        assert_eq!(result.ftp_rate, 2.5);
        assert_eq!(result.ftp_charge, dec!(137_500));
        assert_eq!(result.ftp_net, dec!(82_500));
    }

    #[test]
    fn test_liability_net_is_negative_below_curve() {
        let checking = BalanceSheetInstrument::builder()
            .product("Core Checking")
            .liability()
            .amount(dec!(3_500_000))
            .rate(0.1)
            .maturity_months(36.0)
            .build()
            .unwrap();

        let result = price_instrument(&checking, &FtpCurve::standard());
        assert_eq!(result.ftp_rate, 2.0);
        assert_eq!(result.ftp_net, dec!(-66_500));
    }

    #[test]
    fn test_sample_summary() {
        let sheet = sample::balance_sheet().unwrap();
        let report = ftp_analysis(&sheet, &FtpCurve::standard(), &AlmConfig::default());

        assert_eq!(report.results.len(), 9);
        assert_eq!(
            report.summary.total,
            report.summary.assets + report.summary.liabilities
        );
        // Investment Securities at 84M: 3.0 - 3.0
        assert_eq!(report.results[3].ftp_net, Decimal::ZERO);
    }

    #[test]
    fn test_extrapolation() {
        let long = BalanceSheetInstrument::builder()
            .product("Long Bond")
            .asset()
            .amount(dec!(1_000))
            .rate(5.0)
            .maturity_months(240.0)
            .build()
            .unwrap();
        let result = price_instrument(&long, &FtpCurve::standard());
        assert_eq!(result.ftp_rate, 3.5);
        assert_eq!(result.ftp_net, dec!(15));
    }

    #[test]
    fn test_rates_and_balances_at_limits() {
        let extreme = BalanceSheetInstrument::builder()
            .product("Max")
            .asset()
            .amount(MAX_AMOUNT)
            .rate(MAX_RATE_PCT)
            .maturity_months(MAX_MATURITY_MONTHS)
            .build()
            .unwrap();
        let curve = FtpCurve::from_pairs(&[(12, -MAX_RATE_PCT)]).unwrap();
        let instruments = vec![extreme; 3];

        let report = ftp_analysis(&instruments, &curve, &AlmConfig::default());
        assert_eq!(report.results[0].ftp_charge, dec!(-10_000_000_000_000_000));
        assert_eq!(report.results[0].ftp_net, dec!(20_000_000_000_000_000));
        assert_eq!(report.summary.total, dec!(60_000_000_000_000_000));
        assert_eq!(report.summary.liabilities, Decimal::ZERO);
    }
}
