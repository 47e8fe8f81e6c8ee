//! Derivatives command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use alm_analytics::{shock_book, summarize_book, BookShock, BookSummary, ShockReport};
use alm_core::AlmConfig;

use crate::cli::OutputFormat;
use crate::input::load_derivatives;
use crate::output::{emit, format_money, print_header, print_table, KeyValue};

/// Arguments for the derivatives command.
#[derive(Args, Debug)]
pub struct DerivativesArgs {
    /// Derivatives book CSV. Defaults to the built-in sample.
    #[arg(short, long)]
    pub book: Option<PathBuf>,

    /// Parallel interest rate shock (%)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub irr_shock: f64,

    /// FX spot shock (%)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub fx_shock: f64,
}

#[derive(Debug, Serialize, Tabled)]
struct PositionRow {
    #[tabled(rename = "Instrument")]
    instrument: String,
    #[tabled(rename = "Type")]
    product_type: String,
    #[tabled(rename = "Notional", display_with = "format_money")]
    notional: Decimal,
    #[tabled(rename = "Current MTM", display_with = "format_money")]
    current_mtm: Decimal,
    #[tabled(rename = "Delta MTM", display_with = "format_money")]
    delta_mtm: Decimal,
    #[tabled(rename = "New MTM", display_with = "format_money")]
    new_mtm: Decimal,
}

#[derive(Debug, Serialize)]
struct DerivativesOutput {
    summary: BookSummary,
    shock: ShockReport,
}

/// Execute the derivatives command.
pub fn execute(args: DerivativesArgs, config: &AlmConfig, format: OutputFormat) -> Result<()> {
    let book = load_derivatives(args.book.as_deref())?;
    let summary = summarize_book(&book);
    let report = shock_book(&book, BookShock::new(args.irr_shock, args.fx_shock), config)?;

    if format == OutputFormat::Table {
        print_header("Derivatives Book");
        let mut totals = vec![
            KeyValue::new("Positions", summary.positions.to_string()),
            KeyValue::money("Total Notional", summary.total_notional),
            KeyValue::money("Total MTM", summary.total_mtm),
            KeyValue::money("Delta-Weighted Notional", summary.delta_weighted_notional),
        ];
        for (kind, notional) in &summary.notional_by_type {
            totals.push(KeyValue::money(format!("{kind} Notional"), *notional));
        }
        print_table(&totals);
    }

    let rows: Vec<PositionRow> = report
        .positions
        .iter()
        .map(|p| PositionRow {
            instrument: p.instrument.clone(),
            product_type: p.product_type.label().to_string(),
            notional: p.notional,
            current_mtm: p.current_mtm,
            delta_mtm: p.total_delta_mtm,
            new_mtm: p.new_mtm,
        })
        .collect();

    let title = format!(
        "Shocked Book (IRR {:+}%, FX {:+}%)",
        report.shock.irr_shock_pct, report.shock.fx_shock_pct
    );
    let totals = [
        KeyValue::money("Total Current MTM", report.total_current_mtm),
        KeyValue::money("Total Delta MTM", report.total_delta_mtm),
        KeyValue::money("Total New MTM", report.total_new_mtm),
    ];
    emit(&title, &DerivativesOutput { summary, shock: report }, &rows, format)?;

    if format == OutputFormat::Table {
        print_table(&totals);
    }
    Ok(())
}
