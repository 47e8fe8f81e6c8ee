//! Liquidity gap and cash-flow gap commands.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::{cash_flow_gap, liquidity_gap};
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::commands::BalanceSheetArgs;
use crate::input::load_balance_sheet;
use crate::output::{emit, format_money, print_warning};

#[derive(Debug, Serialize, Tabled)]
struct LiquidityRow {
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Inflows", display_with = "format_money")]
    inflows: Decimal,
    #[tabled(rename = "Outflows", display_with = "format_money")]
    outflows: Decimal,
    #[tabled(rename = "Gap", display_with = "format_money")]
    gap: Decimal,
    #[tabled(rename = "Cumulative Gap", display_with = "format_money")]
    cumulative_gap: Decimal,
}

#[derive(Debug, Serialize, Tabled)]
struct CashFlowRow {
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Monthly Inflows", display_with = "format_money")]
    monthly_inflows: Decimal,
    #[tabled(rename = "Monthly Outflows", display_with = "format_money")]
    monthly_outflows: Decimal,
    #[tabled(rename = "Net Cash Flow", display_with = "format_money")]
    net_cash_flow: Decimal,
}

/// Execute the liquidity-gap command.
pub fn execute_liquidity(
    args: BalanceSheetArgs,
    config: &AlmConfig,
    format: OutputFormat,
) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let table = liquidity_gap(&sheet, &config.buckets, config);

    let rows: Vec<LiquidityRow> = table
        .rows
        .iter()
        .map(|r| LiquidityRow {
            bucket: r.label.clone(),
            inflows: r.inflows,
            outflows: r.outflows,
            gap: r.gap,
            cumulative_gap: r.cumulative_gap,
        })
        .collect();

    emit("Liquidity Gap", &table, &rows, format)?;

    if format == OutputFormat::Table {
        for row in table.funding_shortfalls() {
            print_warning(&format!(
                "funding shortfall in {}: cumulative gap {}",
                row.label,
                format_money(&row.cumulative_gap)
            ));
        }
    }
    Ok(())
}

/// Execute the cash-flow-gap command.
pub fn execute_cash_flow(
    args: BalanceSheetArgs,
    config: &AlmConfig,
    format: OutputFormat,
) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let table = cash_flow_gap(&sheet, &config.buckets, config);

    let rows: Vec<CashFlowRow> = table
        .rows
        .iter()
        .map(|r| CashFlowRow {
            bucket: r.label.clone(),
            monthly_inflows: r.monthly_inflows,
            monthly_outflows: r.monthly_outflows,
            net_cash_flow: r.net_cash_flow,
        })
        .collect();

    emit("Cash Flow Gap (monthly)", &table, &rows, format)
}
