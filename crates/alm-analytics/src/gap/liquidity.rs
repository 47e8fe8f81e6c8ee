//! Liquidity gap: balances by maturity bucket with a running gap.

use crate::bucketing::bucket_by_side;
use alm_core::{AlmConfig, BalanceSheetInstrument, BucketSchedule, MaturityBucket};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bucket of the liquidity gap table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityGapRow {
    /// The maturity bucket.
    pub bucket: MaturityBucket,
    /// Bucket label.
    pub label: String,
    /// Asset balances maturing in the bucket.
    pub inflows: Decimal,
    /// Liability balances maturing in the bucket.
    pub outflows: Decimal,
    /// `inflows - outflows`.
    pub gap: Decimal,
    /// Running sum of `gap` up to and including this bucket.
    pub cumulative_gap: Decimal,
}

/// Liquidity gap table in ascending bucket order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidityGapTable {
    /// One row per bucket of the schedule.
    pub rows: Vec<LiquidityGapRow>,
}

impl LiquidityGapTable {
    /// Returns the row with the given label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&LiquidityGapRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Total inflows across all buckets.
    #[must_use]
    pub fn total_inflows(&self) -> Decimal {
        self.rows.iter().map(|r| r.inflows).sum()
    }

    /// Total outflows across all buckets.
    #[must_use]
    pub fn total_outflows(&self) -> Decimal {
        self.rows.iter().map(|r| r.outflows).sum()
    }

    /// Cumulative gap of the last bucket.
    #[must_use]
    pub fn final_cumulative_gap(&self) -> Decimal {
        self.rows.last().map_or(Decimal::ZERO, |r| r.cumulative_gap)
    }

    /// Buckets whose cumulative gap is negative.
    #[must_use]
    pub fn funding_shortfalls(&self) -> Vec<&LiquidityGapRow> {
        self.rows
            .iter()
            .filter(|r| r.cumulative_gap.is_sign_negative() && !r.cumulative_gap.is_zero())
            .collect()
    }
}

/// Builds the liquidity gap table.
///
/// Every bucket of the schedule appears, empty ones with zero flows. The
/// final cumulative gap equals total assets minus total liabilities.
#[must_use]
pub fn liquidity_gap(
    instruments: &[BalanceSheetInstrument],
    schedule: &BucketSchedule,
    config: &AlmConfig,
) -> LiquidityGapTable {
    let totals = bucket_by_side(instruments, schedule, config, |i| i.amount);

    let mut cumulative = Decimal::ZERO;
    let rows = schedule
        .buckets()
        .into_iter()
        .zip(totals)
        .map(|(bucket, t)| {
            let gap = t.net();
            cumulative += gap;
            LiquidityGapRow {
                label: bucket.label(),
                bucket,
                inflows: t.assets,
                outflows: t.liabilities,
                gap,
                cumulative_gap: cumulative,
            }
        })
        .collect();

    let table = LiquidityGapTable { rows };
    tracing::debug!(
        buckets = table.rows.len(),
        cumulative_gap = %table.final_cumulative_gap(),
        "computed liquidity gap"
    );
    table
}
