//! Curve command implementation.
//!
//! Shocks the configured base curve and reports per-tenor shifts.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::{generate_curve_scenario, CurveShock};
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{emit, format_bps, print_table, KeyValue};

/// Shock shapes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShockKind {
    /// Same shift at every tenor
    Parallel,
    /// Long end up
    BearSteepener,
    /// Long end down
    BullSteepener,
    /// One shift per key tenor
    Custom,
}

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Scenario name
    #[arg(short, long, default_value = "Custom Scenario")]
    pub name: String,

    /// Shock shape
    #[arg(short, long, value_enum, default_value = "parallel")]
    pub shock: ShockKind,

    /// Parallel shift in basis points
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub bps: f64,

    /// Per-tenor shifts in basis points for a custom shock (comma-separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub deltas: Vec<f64>,
}

impl CurveArgs {
    fn shock(&self) -> Result<CurveShock, CliError> {
        Ok(match self.shock {
            ShockKind::Parallel => CurveShock::ParallelShift(self.bps),
            ShockKind::BearSteepener => CurveShock::BearSteepener,
            ShockKind::BullSteepener => CurveShock::BullSteepener,
            ShockKind::Custom if self.deltas.is_empty() => {
                return Err(CliError::InvalidArgument(
                    "--deltas is required for a custom shock".to_string(),
                ))
            }
            ShockKind::Custom => CurveShock::CustomKeyRate(self.deltas.clone()),
        })
    }
}

#[derive(Debug, Serialize, Tabled)]
struct TenorRow {
    #[tabled(rename = "Tenor (yrs)")]
    tenor: f64,
    #[tabled(rename = "Base (%)")]
    base: String,
    #[tabled(rename = "Shocked (%)")]
    shocked: String,
    #[tabled(rename = "Shift (bps)", display_with = "format_bps")]
    shift_bps: f64,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let shock = args.shock()?;
    let output = generate_curve_scenario(&args.name, &shock, &config.curve_scenarios)?;

    let rows: Vec<TenorRow> = output
        .tenors
        .iter()
        .zip(&output.base_curve)
        .zip(&output.shocked_curve)
        .zip(&output.bp_shift_per_tenor)
        .map(|(((tenor, base), shocked), shift)| TenorRow {
            tenor: *tenor,
            base: format!("{base:.3}"),
            shocked: format!("{shocked:.3}"),
            shift_bps: *shift,
        })
        .collect();

    emit(&format!("{} ({})", output.name, output.shock_type), &output, &rows, format)?;

    if format == OutputFormat::Table {
        print_table(&[
            KeyValue::new("DV01 Estimate", format!("{:.2}", output.dv01_estimate)),
            KeyValue::new("Generated", output.timestamp.to_rfc3339()),
        ]);
    }
    Ok(())
}
