//! # ALM Core
//!
//! Shared building blocks for asset-liability management analytics.
//!
//! This crate holds the plain data the calculators in `alm-analytics` run
//! against: balance-sheet and derivative instruments, maturity bucket
//! schedules, behavioural rate sensitivities, rate scenarios, yield and
//! transfer-pricing curves, engine configuration and the error taxonomy.
//!
//! ## Design Philosophy
//!
//! - **Validated once**: builders and constructors reject bad values, so
//!   calculators can assume well-formed input
//! - **Exact money**: balances, notionals and MTM are [`rust_decimal::Decimal`];
//!   rates, durations and curve points are `f64`
//! - **Serde everywhere**: every type round-trips through JSON, and the
//!   configuration loads from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use alm_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mortgage = BalanceSheetInstrument::builder()
//!     .product("Fixed Mortgage")
//!     .asset()
//!     .amount(dec!(5_500_000))
//!     .rate(4.0)
//!     .duration(5.0)
//!     .maturity_months(60.0)
//!     .build()
//!     .unwrap();
//!
//! let buckets = BucketSchedule::standard();
//! assert_eq!(buckets.bucket_for(mortgage.maturity_months).label(), "60M");
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Lets configs enable rayon-backed execution downstream

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod limits;
pub mod records;
pub mod sample;
pub mod types;

pub use config::{AlmConfig, CurveScenarioConfig, DEFAULT_DURATION_YEARS};
pub use error::{AlmError, AlmResult};

pub use records::{
    balance_sheet_from_records, check_headers, derivatives_from_records, BalanceSheetRecord,
    ColumnSpec, DerivativeRecord, BALANCE_SHEET_COLUMNS, DERIVATIVE_COLUMNS,
};

pub use types::{
    standard_scenarios,
    // Instruments
    BalanceSheetInstrument,
    // Buckets
    BucketSchedule,
    // Curves
    CurvePoint,
    DerivativeBuilder,
    DerivativeInstrument,
    FtpCurve,
    FtpPoint,
    InstrumentBuilder,
    MaturityBucket,
    ProductType,
    // Sensitivities
    RateSensitivityTable,
    // Scenarios
    Scenario,
    SensitivityPolicy,
    Side,
    YieldCurve,
    BASE_SCENARIO,
    STANDARD_EDGES,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{AlmConfig, CurveScenarioConfig};
    pub use crate::error::{AlmError, AlmResult};
    pub use crate::types::{
        standard_scenarios, BalanceSheetInstrument, BucketSchedule, DerivativeInstrument,
        FtpCurve, MaturityBucket, ProductType, RateSensitivityTable, Scenario,
        SensitivityPolicy, Side, YieldCurve,
    };
}
