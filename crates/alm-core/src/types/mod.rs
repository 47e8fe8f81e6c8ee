//! Domain types for ALM analytics.
//!
//! This module provides type-safe representations of ALM concepts:
//!
//! - [`BalanceSheetInstrument`]: A balance-sheet line (asset or liability)
//! - [`DerivativeInstrument`]: A position in the IRR/FX derivatives book
//! - [`BucketSchedule`] / [`MaturityBucket`]: Maturity time bands
//! - [`RateSensitivityTable`]: Behavioural balance sensitivities
//! - [`Scenario`]: Named parallel rate shifts
//! - [`YieldCurve`] / [`FtpCurve`]: Key-tenor and transfer-pricing curves

mod bucket;
mod curve;
mod derivative;
mod instrument;
mod scenario;
mod sensitivity;

pub use bucket::{BucketSchedule, MaturityBucket, STANDARD_EDGES};
pub use curve::{CurvePoint, FtpCurve, FtpPoint, YieldCurve};
pub use derivative::{DerivativeBuilder, DerivativeInstrument, ProductType};
pub use instrument::{BalanceSheetInstrument, InstrumentBuilder, Side};
pub use scenario::{standard as standard_scenarios, Scenario, BASE_SCENARIO};
pub use sensitivity::{RateSensitivityTable, SensitivityPolicy};
