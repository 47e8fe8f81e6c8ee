//! IRR command implementation.
//!
//! Runs the standard scenario set with adjustable base, up and down shifts.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::run_rate_scenarios;
use alm_core::{standard_scenarios, AlmConfig, Scenario, BASE_SCENARIO};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::input::{load_balance_sheet, load_sensitivities};
use crate::output::{emit, format_bps, format_money, print_warning};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    /// Balance sheet CSV. Defaults to the built-in sample.
    #[arg(short, long)]
    pub balance_sheet: Option<PathBuf>,

    /// Baseline rate shift (percentage points)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub base_shift: f64,

    /// Upward shock magnitude (percentage points)
    #[arg(long, default_value = "1.0")]
    pub shock_up: f64,

    /// Downward shock magnitude (percentage points)
    #[arg(long, default_value = "1.0")]
    pub shock_down: f64,

    /// Sensitivity table as JSON (`{"Product": coefficient}`)
    #[arg(short, long)]
    pub sensitivities: Option<PathBuf>,
}

#[derive(Debug, Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Shift (bps)", display_with = "format_bps")]
    shift_bps: f64,
    #[tabled(rename = "NII", display_with = "format_money")]
    nii: Decimal,
    #[tabled(rename = "Delta NII", display_with = "format_money")]
    delta_nii: Decimal,
    #[tabled(rename = "Delta EVE", display_with = "format_money")]
    delta_eve: Decimal,
}

/// Builds the scenario set, naming the baseline as configured.
///
/// The configured baseline name may not reuse another standard scenario's
/// name.
fn scenarios(args: &IrrArgs, config: &AlmConfig) -> CliResult<Vec<Scenario>> {
    let standard = standard_scenarios::with_shocks(args.base_shift, args.shock_up, args.shock_down);
    let baseline = &config.baseline_scenario;
    if baseline != BASE_SCENARIO && standard.iter().any(|s| &s.name == baseline) {
        return Err(CliError::InvalidArgument(format!(
            "baseline_scenario \"{baseline}\" clashes with a standard scenario name"
        )));
    }

    Ok(standard
        .into_iter()
        .map(|mut s| {
            if s.name == BASE_SCENARIO {
                s.name.clone_from(baseline);
            }
            s
        })
        .collect())
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let table = load_sensitivities(args.sensitivities.as_deref())?;
    let scenarios = scenarios(&args, config)?;
    let report = run_rate_scenarios(&sheet, &table, &scenarios, config)?;

    let rows: Vec<ScenarioRow> = report
        .rows
        .iter()
        .map(|r| ScenarioRow {
            scenario: r.scenario.clone(),
            shift_bps: r.rate_shift_pct * 100.0,
            nii: r.nii,
            delta_nii: r.delta_from_base_nii,
            delta_eve: r.delta_eve,
        })
        .collect();

    emit("Interest Rate Risk Scenarios", &report, &rows, format)?;

    if !report.unmatched_products.is_empty() {
        print_warning(&format!(
            "no sensitivity for: {} (treated as 0)",
            report.unmatched_products.join(", ")
        ));
    }
    Ok(())
}
