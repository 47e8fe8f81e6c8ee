//! Yield curve scenario generator.
//!
//! Applies a shock to the configured base curve at its key tenors and
//! estimates the dollar impact with a flat per-basis-point DV01:
//!
//! ```text
//! bp_shift[i]   = round((shocked[i] − base[i]) × 100, 1)
//! dv01_estimate = Σ bp_shift[i] × assumed_dv01
//! ```
//!
//! No interpolation is done between key tenors.

use alm_core::{AlmError, AlmResult, CurveScenarioConfig, YieldCurve};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a yield curve shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveShock {
    /// Same shift at every tenor (bps).
    ParallelShift(f64),

    /// Tenor `i` rises by `i × step` bps.
    BearSteepener,

    /// Tenor `i` falls by `i × step` bps.
    BullSteepener,

    /// Independent shift per key tenor (bps), one per tenor.
    CustomKeyRate(Vec<f64>),
}

impl CurveShock {
    /// Display name of the shock type.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ParallelShift(_) => "Parallel Shift",
            Self::BearSteepener => "Bear Steepener",
            Self::BullSteepener => "Bull Steepener",
            Self::CustomKeyRate(_) => "Custom Key Rate Shock",
        }
    }

    /// Shift in bps at tenor index `i`.
    fn shift_bps_at(&self, index: usize, step_bps: f64) -> f64 {
        match self {
            Self::ParallelShift(bps) => *bps,
            Self::BearSteepener => index as f64 * step_bps,
            Self::BullSteepener => -(index as f64) * step_bps,
            Self::CustomKeyRate(deltas) => deltas.get(index).copied().unwrap_or(0.0),
        }
    }

    fn validate(&self, tenor_count: usize) -> AlmResult<()> {
        match self {
            Self::ParallelShift(bps) if !bps.is_finite() => {
                Err(AlmError::invalid_input("parallel shift must be finite"))
            }
            Self::CustomKeyRate(deltas) if deltas.len() != tenor_count => {
                Err(AlmError::invalid_input(format!(
                    "custom key rate shock needs {tenor_count} deltas, got {}",
                    deltas.len()
                )))
            }
            Self::CustomKeyRate(deltas) if deltas.iter().any(|d| !d.is_finite()) => {
                Err(AlmError::invalid_input("key rate deltas must be finite"))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for CurveShock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParallelShift(bps) => write!(f, "{} ({bps:+}bps)", self.label()),
            _ => write!(f, "{}", self.label()),
        }
    }
}

/// A generated yield curve scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    /// Scenario name.
    pub name: String,
    /// Shock type label.
    pub shock_type: String,
    /// Base yields in percent.
    pub base_curve: Vec<f64>,
    /// Shocked yields in percent.
    pub shocked_curve: Vec<f64>,
    /// Key tenors in years.
    pub tenors: Vec<f64>,
    /// Shift per tenor in bps, rounded to one decimal.
    pub bp_shift_per_tenor: Vec<f64>,
    /// Dollar impact estimate per $1M notional.
    pub dv01_estimate: f64,
    /// Generation time.
    pub timestamp: DateTime<Utc>,
}

impl ScenarioOutput {
    /// Rebuilds the shocked curve.
    ///
    /// # Errors
    ///
    /// Returns [`AlmError::InvalidInput`] if the stored vectors are inconsistent.
    pub fn shocked(&self) -> AlmResult<YieldCurve> {
        YieldCurve::from_tenors(&self.tenors, &self.shocked_curve)
    }
}

fn round_bps(bps: f64) -> f64 {
    (bps * 10.0).round() / 10.0
}

/// Generates a scenario stamped with the current time.
///
/// # Errors
///
/// See [`generate_curve_scenario_at`].
pub fn generate_curve_scenario(
    name: &str,
    shock: &CurveShock,
    config: &CurveScenarioConfig,
) -> AlmResult<ScenarioOutput> {
    generate_curve_scenario_at(name, shock, config, Utc::now())
}

/// Generates a scenario with an explicit timestamp.
///
/// # Errors
///
/// Returns [`AlmError::InvalidInput`] if the name is blank or the shock does
/// not fit the base curve.
pub fn generate_curve_scenario_at(
    name: &str,
    shock: &CurveShock,
    config: &CurveScenarioConfig,
    timestamp: DateTime<Utc>,
) -> AlmResult<ScenarioOutput> {
    if name.trim().is_empty() {
        return Err(AlmError::invalid_input("scenario name cannot be empty"));
    }
    let base = &config.base_curve;
    shock.validate(base.len())?;

    let step = config.steepener_step_bps;
    let shocked = base.shifted(|i, _| shock.shift_bps_at(i, step) / 100.0);

    let base_yields = base.yields();
    let shocked_yields = shocked.yields();
    let bp_shift_per_tenor: Vec<f64> = shocked_yields
        .iter()
        .zip(&base_yields)
        .map(|(new, old)| round_bps((new - old) * 100.0))
        .collect();
    let dv01_estimate = bp_shift_per_tenor
        .iter()
        .map(|bp| bp * config.assumed_dv01)
        .sum();

    tracing::debug!(
        scenario = name,
        shock = %shock,
        dv01_estimate,
        "generated curve scenario"
    );

    Ok(ScenarioOutput {
        name: name.to_string(),
        shock_type: shock.label().to_string(),
        base_curve: base_yields,
        shocked_curve: shocked_yields,
        tenors: base.tenors(),
        bp_shift_per_tenor,
        dv01_estimate,
        timestamp,
    })
}
