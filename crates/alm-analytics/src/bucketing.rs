//! Maturity bucketing of balance-sheet instruments.
//!
//! Assigns every instrument to exactly one bucket of a [`BucketSchedule`]
//! and aggregates per-side totals by bucket for the gap calculators.

use crate::parallel::maybe_parallel_fold;
use alm_core::{AlmConfig, BalanceSheetInstrument, BucketSchedule, MaturityBucket, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An instrument placed in its maturity bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketAssignment {
    /// Product name.
    pub product: String,
    /// Balance-sheet side.
    pub side: Side,
    /// Balance.
    pub amount: Decimal,
    /// Maturity in months.
    pub maturity_months: f64,
    /// Assigned bucket.
    pub bucket: MaturityBucket,
}

/// Asset and liability totals within one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideTotals {
    /// Sum over assets.
    pub assets: Decimal,
    /// Sum over liabilities.
    pub liabilities: Decimal,
}

impl SideTotals {
    /// Adds a value to the given side.
    #[must_use]
    pub fn add(mut self, side: Side, value: Decimal) -> Self {
        match side {
            Side::Asset => self.assets += value,
            Side::Liability => self.liabilities += value,
        }
        self
    }

    /// Combines two partial totals.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            assets: self.assets + other.assets,
            liabilities: self.liabilities + other.liabilities,
        }
    }

    /// Assets minus liabilities.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.assets - self.liabilities
    }
}

/// Classifies a single maturity against a schedule.
#[must_use]
pub fn assign_bucket(maturity_months: f64, schedule: &BucketSchedule) -> MaturityBucket {
    schedule.bucket_for(maturity_months)
}

/// Places every instrument in its bucket, keeping input order.
#[must_use]
pub fn bucket_instruments(
    instruments: &[BalanceSheetInstrument],
    schedule: &BucketSchedule,
) -> Vec<BucketAssignment> {
    instruments
        .iter()
        .map(|inst| BucketAssignment {
            product: inst.product.clone(),
            side: inst.side,
            amount: inst.amount,
            maturity_months: inst.maturity_months,
            bucket: schedule.bucket_for(inst.maturity_months),
        })
        .collect()
}

/// Sums a per-instrument value by bucket and side.
///
/// The result has one entry per bucket of the schedule, in ascending
/// maturity order; empty buckets hold zeros.
pub fn bucket_by_side<F>(
    instruments: &[BalanceSheetInstrument],
    schedule: &BucketSchedule,
    config: &AlmConfig,
    value: F,
) -> Vec<SideTotals>
where
    F: Fn(&BalanceSheetInstrument) -> Decimal + Sync + Send,
{
    maybe_parallel_fold(
        instruments,
        config,
        vec![SideTotals::default(); schedule.len()],
        |mut acc, inst| {
            let i = schedule.index_for(inst.maturity_months);
            acc[i] = acc[i].add(inst.side, value(inst));
            acc
        },
        |mut a, b| {
            for (x, y) in a.iter_mut().zip(b) {
                *x = x.merge(y);
            }
            a
        },
    )
}
