//! # ALM Analytics
//!
//! Asset-liability management risk calculators over `alm-core` types.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculator takes explicit inputs and returns a
//!   complete result table; nothing is cached or persisted
//! - **Exact gaps**: balance aggregation uses `Decimal`, so the final
//!   cumulative liquidity gap equals total assets minus total liabilities
//! - **Config-driven parallelism**: optional rayon support with
//!   threshold-based switching; output order never depends on it
//!
//! ## Features
//!
//! - **Gap Analysis**: liquidity gap and cash-flow gap by maturity bucket
//! - **FTP**: transfer-priced margins by instrument and side
//! - **Duration Gap**: amount-weighted asset and liability durations
//! - **Rate Scenarios**: NII and ΔEVE under named parallel shifts
//! - **Curve Scenarios**: parallel, steepener and key-rate curve shocks
//! - **Derivatives**: IRR/FX shock revaluation and book summary
//!
//! ## Quick Start
//!
//! ```rust
//! use alm_analytics::prelude::*;
//! use alm_core::sample;
//!
//! let sheet = sample::balance_sheet().unwrap();
//! let config = AlmConfig::default();
//!
//! let gap = liquidity_gap(&sheet, &config.buckets, &config);
//! assert_eq!(gap.rows.len(), 8);
//!
//! let report = run_rate_scenarios(
//!     &sheet,
//!     &RateSensitivityTable::standard(),
//!     &standard_scenarios::all(),
//!     &config,
//! )
//! .unwrap();
//! assert!(report.baseline_result().unwrap().delta_from_base_nii.is_zero());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large inputs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucketing;
pub mod curve_scenario;
pub mod derivatives;
pub mod duration;
pub mod ftp;
pub mod gap;
pub mod irr;
mod numeric;
pub mod overview;
pub mod parallel;

pub use bucketing::{
    assign_bucket, bucket_by_side, bucket_instruments, BucketAssignment, SideTotals,
};
pub use curve_scenario::{
    generate_curve_scenario, generate_curve_scenario_at, CurveShock, ScenarioOutput,
};
pub use derivatives::{
    shock_book, shock_position, summarize_book, BookShock, BookSummary, ShockReport,
    ShockedPosition,
};
pub use duration::{duration_gap, DurationGap};
pub use ftp::{ftp_analysis, price_instrument, FtpReport, FtpResult, FtpSummary};
pub use gap::{
    cash_flow_gap, liquidity_gap, monthly_flow, CashFlowGapRow, CashFlowGapTable,
    LiquidityGapRow, LiquidityGapTable,
};
pub use irr::{
    project_instrument, project_scenario, run_rate_scenarios, InstrumentProjection,
    ScenarioReport, ScenarioResult,
};
pub use overview::{balance_sheet_overview, BalanceSheetOverview, ProductBalance};
pub use parallel::{maybe_parallel_fold, maybe_parallel_map, maybe_parallel_try_map};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        balance_sheet_overview, cash_flow_gap, duration_gap, ftp_analysis,
        generate_curve_scenario, generate_curve_scenario_at, liquidity_gap, run_rate_scenarios,
        shock_book, summarize_book, BookShock, CurveShock,
    };
    pub use alm_core::prelude::*;
}
