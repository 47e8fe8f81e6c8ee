//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    BalanceSheetArgs, CurveArgs, DerivativesArgs, IrrArgs, SampleArgs,
};

/// ALM - Asset-liability management risk analytics CLI
#[derive(Parser)]
#[command(name = "alm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "ALM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Total assets, liabilities, equity and product balances
    Overview(BalanceSheetArgs),

    /// Liquidity gap by maturity bucket
    LiquidityGap(BalanceSheetArgs),

    /// Monthly cash-flow gap by maturity bucket
    CashFlowGap(BalanceSheetArgs),

    /// Funds transfer pricing margins
    Ftp(BalanceSheetArgs),

    /// Weighted asset and liability duration gap
    DurationGap(BalanceSheetArgs),

    /// NII and delta EVE under rate scenarios
    Irr(IrrArgs),

    /// Shock the yield curve at its key tenors
    Curve(CurveArgs),

    /// Shock the IRR/FX derivatives book
    Derivatives(DerivativesArgs),

    /// Print sample input data
    Sample(SampleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
