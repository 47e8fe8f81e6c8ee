//! Duration gap command implementation.

use anyhow::Result;

use alm_analytics::duration_gap;
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::commands::BalanceSheetArgs;
use crate::input::load_balance_sheet;
use crate::output::{emit, format_years, KeyValue};

/// Execute the duration-gap command.
pub fn execute(args: BalanceSheetArgs, config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let gap = duration_gap(&sheet, config)?;

    let rows = vec![
        KeyValue::new("Asset Duration (yrs)", format_years(&gap.asset_duration)),
        KeyValue::new("Liability Duration (yrs)", format_years(&gap.liability_duration)),
        KeyValue::new("Duration Gap (yrs)", format_years(&gap.duration_gap)),
        KeyValue::new(
            "Leverage-Adjusted Gap (yrs)",
            format_years(&gap.leverage_adjusted_gap()),
        ),
        KeyValue::money("Total Assets", gap.total_assets),
        KeyValue::money("Total Liabilities", gap.total_liabilities),
    ];

    emit("Duration Gap", &gap, &rows, format)
}
