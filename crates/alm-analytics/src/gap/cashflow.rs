//! Cash-flow gap: balances spread evenly over their remaining life.

use crate::bucketing::bucket_by_side;
use alm_core::{AlmConfig, BalanceSheetInstrument, BucketSchedule, MaturityBucket};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bucket of the cash-flow gap table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowGapRow {
    /// The maturity bucket.
    pub bucket: MaturityBucket,
    /// Bucket label.
    pub label: String,
    /// Monthly asset flows.
    pub monthly_inflows: Decimal,
    /// Monthly liability flows.
    pub monthly_outflows: Decimal,
    /// `monthly_inflows - monthly_outflows`.
    pub net_cash_flow: Decimal,
}

/// Cash-flow gap table in ascending bucket order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowGapTable {
    /// One row per bucket of the schedule.
    pub rows: Vec<CashFlowGapRow>,
}

impl CashFlowGapTable {
    /// Returns the row with the given label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&CashFlowGapRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Net monthly flow summed over buckets.
    #[must_use]
    pub fn total_net_cash_flow(&self) -> Decimal {
        self.rows.iter().map(|r| r.net_cash_flow).sum()
    }
}

/// Even monthly flow of an instrument.
///
/// Maturities under one month (including zero) are treated as one month.
/// A maturity too long to represent as a `Decimal` (or not a number) spreads
/// the balance to nothing and yields zero.
#[must_use]
pub fn monthly_flow(instrument: &BalanceSheetInstrument) -> Decimal {
    if instrument.maturity_months.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64_retain(instrument.maturity_months.max(1.0))
        .map_or(Decimal::ZERO, |months| instrument.amount / months)
}

/// Builds the cash-flow gap table over the given schedule.
#[must_use]
pub fn cash_flow_gap(
    instruments: &[BalanceSheetInstrument],
    schedule: &BucketSchedule,
    config: &AlmConfig,
) -> CashFlowGapTable {
    let totals = bucket_by_side(instruments, schedule, config, monthly_flow);

    let rows = schedule
        .buckets()
        .into_iter()
        .zip(totals)
        .map(|(bucket, t)| CashFlowGapRow {
            label: bucket.label(),
            bucket,
            monthly_inflows: t.assets,
            monthly_outflows: t.liabilities,
            net_cash_flow: t.net(),
        })
        .collect();

    let table = CashFlowGapTable { rows };
    tracing::debug!(
        buckets = table.rows.len(),
        net = %table.total_net_cash_flow(),
        "computed cash flow gap"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use alm_core::limits::{MAX_AMOUNT, MAX_MATURITY_MONTHS};
    use alm_core::Side;
    use rust_decimal_macros::dec;

    fn instrument(asset: bool, amount: Decimal, months: f64) -> BalanceSheetInstrument {
        let builder = BalanceSheetInstrument::builder()
            .product("X")
            .amount(amount)
            .rate(1.0)
            .maturity_months(months);
        let builder = if asset { builder.asset() } else { builder.liability() };
        builder.build().unwrap()
    }

    #[test]
    fn test_monthly_flow() {
        assert_eq!(monthly_flow(&instrument(true, dec!(1_200_000), 12.0)), dec!(100_000));
        // Zero maturity is treated as one month
        assert_eq!(monthly_flow(&instrument(true, dec!(500), 0.0)), dec!(500));
        assert_eq!(monthly_flow(&instrument(true, dec!(500), 0.5)), dec!(500));
    }

    #[test]
    fn test_monthly_flow_at_limits() {
        let longest = instrument(true, MAX_AMOUNT, MAX_MATURITY_MONTHS);
        let flow = monthly_flow(&longest);
        assert!(flow > dec!(83_333_333_333.33) && flow < dec!(83_333_333_333.34));

        // Unvalidated maturities never fall back to a one-month divisor
        let unrepresentable = BalanceSheetInstrument {
            product: "X".into(),
            side: Side::Asset,
            amount: dec!(1_000_000),
            rate: 1.0,
            duration: None,
            maturity_months: 1e30,
        };
        assert_eq!(monthly_flow(&unrepresentable), Decimal::ZERO);

        let nan = BalanceSheetInstrument {
            maturity_months: f64::NAN,
            ..unrepresentable
        };
        assert_eq!(monthly_flow(&nan), Decimal::ZERO);
    }

    #[test]
    fn test_cash_flow_gap() {
        let instruments = vec![
            instrument(true, dec!(1_200_000), 12.0),
            instrument(false, dec!(600_000), 12.0),
            instrument(false, dec!(3_600_000), 36.0),
        ];
        let table = cash_flow_gap(
            &instruments,
            &BucketSchedule::standard(),
            &AlmConfig::default(),
        );

        let row = table.get("12M").unwrap();
        assert_eq!(row.monthly_inflows, dec!(100_000));
        assert_eq!(row.monthly_outflows, dec!(50_000));
        assert_eq!(row.net_cash_flow, dec!(50_000));
        assert_eq!(table.get("36M").unwrap().net_cash_flow, dec!(-100_000));
        assert_eq!(table.get("1M").unwrap().net_cash_flow, Decimal::ZERO);
        assert_eq!(table.total_net_cash_flow(), dec!(-50_000));
    }
}
