//! Sample command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};

use alm_core::sample;

/// Which sample data set to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Balance sheet CSV
    BalanceSheet,
    /// Derivatives book CSV
    Derivatives,
}

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Data set to print
    #[arg(short, long, value_enum, default_value = "balance-sheet")]
    pub kind: SampleKind,
}

/// Execute the sample command.
///
/// Always prints CSV so the output can be edited and fed back in.
pub fn execute(args: SampleArgs) -> Result<()> {
    let csv = match args.kind {
        SampleKind::BalanceSheet => sample::BALANCE_SHEET_CSV,
        SampleKind::Derivatives => sample::DERIVATIVES_CSV,
    };
    print!("{csv}");
    Ok(())
}
