//! FTP command implementation.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::ftp_analysis;
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::commands::BalanceSheetArgs;
use crate::input::load_balance_sheet;
use crate::output::{emit, format_money, format_pct, print_table, KeyValue};

#[derive(Debug, Serialize, Tabled)]
struct FtpRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Type")]
    side: String,
    #[tabled(rename = "Amount", display_with = "format_money")]
    amount: Decimal,
    #[tabled(rename = "Rate", display_with = "format_pct")]
    rate: f64,
    #[tabled(rename = "FTP Rate", display_with = "format_pct")]
    ftp_rate: f64,
    #[tabled(rename = "FTP Charge", display_with = "format_money")]
    ftp_charge: Decimal,
    #[tabled(rename = "FTP Net", display_with = "format_money")]
    ftp_net: Decimal,
}

/// Execute the ftp command.
pub fn execute(args: BalanceSheetArgs, config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let report = ftp_analysis(&sheet, &config.ftp_curve, config);

    let rows: Vec<FtpRow> = report
        .results
        .iter()
        .map(|r| FtpRow {
            product: r.product.clone(),
            side: r.side.label().to_string(),
            amount: r.amount,
            rate: r.rate,
            ftp_rate: r.ftp_rate,
            ftp_charge: r.ftp_charge,
            ftp_net: r.ftp_net,
        })
        .collect();

    emit("Funds Transfer Pricing", &report, &rows, format)?;

    if format == OutputFormat::Table {
        print_table(&[
            KeyValue::money("Asset FTP Net", report.summary.assets),
            KeyValue::money("Liability FTP Net", report.summary.liabilities),
            KeyValue::money("Total FTP Net", report.summary.total),
        ]);
    }
    Ok(())
}
