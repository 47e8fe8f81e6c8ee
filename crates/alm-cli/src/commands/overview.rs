//! Overview command implementation.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::balance_sheet_overview;
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::commands::BalanceSheetArgs;
use crate::input::load_balance_sheet;
use crate::output::{emit, format_money, format_pct_decimal, print_header, print_table, KeyValue};

#[derive(Debug, Serialize, Tabled)]
struct ProductRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Type")]
    side: String,
    #[tabled(rename = "Amount", display_with = "format_money")]
    amount: Decimal,
    #[tabled(rename = "Share of Side", display_with = "format_pct_decimal")]
    share_pct: Decimal,
}

/// Execute the overview command.
pub fn execute(args: BalanceSheetArgs, _config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let sheet = load_balance_sheet(args.balance_sheet.as_deref())?;
    let overview = balance_sheet_overview(&sheet);

    let rows: Vec<ProductRow> = overview
        .products
        .iter()
        .map(|p| ProductRow {
            product: p.product.clone(),
            side: p.side.label().to_string(),
            amount: p.amount,
            share_pct: p.share_of_side_pct,
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Balance Sheet Overview");
        let mut totals = vec![
            KeyValue::money("Total Assets", overview.total_assets),
            KeyValue::money("Total Liabilities", overview.total_liabilities),
            KeyValue::money("Equity", overview.equity),
        ];
        if let Some(ratio) = overview.equity_ratio_pct() {
            totals.push(KeyValue::new("Equity / Assets", format_pct_decimal(&ratio)));
        }
        print_table(&totals);
    }

    emit("Product Balances", &overview, &rows, format)
}
