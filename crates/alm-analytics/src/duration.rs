//! Duration gap.
//!
//! ```text
//! D_A = Σ(amount × duration) / Σ amount   over assets
//! D_L = Σ(amount × duration) / Σ amount   over liabilities
//! duration_gap = D_A − D_L
//! ```

use crate::numeric::{to_decimal, to_f64};
use crate::parallel::maybe_parallel_fold;
use alm_core::{AlmConfig, AlmError, AlmResult, BalanceSheetInstrument, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amount-weighted durations of both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationGap {
    /// Weighted asset duration in years.
    pub asset_duration: f64,
    /// Weighted liability duration in years.
    pub liability_duration: f64,
    /// `asset_duration - liability_duration`.
    pub duration_gap: f64,
    /// Total asset balance.
    pub total_assets: Decimal,
    /// Total liability balance.
    pub total_liabilities: Decimal,
}

impl DurationGap {
    /// Leverage-adjusted gap: `D_A − (L/A) × D_L`.
    #[must_use]
    pub fn leverage_adjusted_gap(&self) -> f64 {
        let ratio = to_f64(self.total_liabilities) / to_f64(self.total_assets);
        self.asset_duration - ratio * self.liability_duration
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct WeightedSums {
    asset_amount: Decimal,
    asset_weighted: Decimal,
    liability_amount: Decimal,
    liability_weighted: Decimal,
}

/// Computes the duration gap.
///
/// Instruments without a duration use `config.default_duration_years`.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] if total assets or total liabilities is zero.
pub fn duration_gap(
    instruments: &[BalanceSheetInstrument],
    config: &AlmConfig,
) -> AlmResult<DurationGap> {
    let default = config.default_duration_years;
    let sums = maybe_parallel_fold(
        instruments,
        config,
        WeightedSums::default(),
        |mut s, inst| {
            let weighted = inst.amount * to_decimal(inst.duration_or(default));
            match inst.side {
                Side::Asset => {
                    s.asset_amount += inst.amount;
                    s.asset_weighted += weighted;
                }
                Side::Liability => {
                    s.liability_amount += inst.amount;
                    s.liability_weighted += weighted;
                }
            }
            s
        },
        |a, b| WeightedSums {
            asset_amount: a.asset_amount + b.asset_amount,
            asset_weighted: a.asset_weighted + b.asset_weighted,
            liability_amount: a.liability_amount + b.liability_amount,
            liability_weighted: a.liability_weighted + b.liability_weighted,
        },
    );

    if sums.asset_amount.is_zero() {
        return Err(AlmError::invalid_input(
            "duration gap needs a non-zero total asset balance",
        ));
    }
    if sums.liability_amount.is_zero() {
        return Err(AlmError::invalid_input(
            "duration gap needs a non-zero total liability balance",
        ));
    }

    let asset_duration = to_f64(sums.asset_weighted / sums.asset_amount);
    let liability_duration = to_f64(sums.liability_weighted / sums.liability_amount);
    let gap = DurationGap {
        asset_duration,
        liability_duration,
        duration_gap: asset_duration - liability_duration,
        total_assets: sums.asset_amount,
        total_liabilities: sums.liability_amount,
    };
    tracing::debug!(
        asset_duration,
        liability_duration,
        duration_gap = gap.duration_gap,
        "computed duration gap"
    );
    Ok(gap)
}
