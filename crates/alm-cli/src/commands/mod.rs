//! CLI command implementations.

pub mod curve;
pub mod derivatives;
pub mod duration;
pub mod ftp;
pub mod gap;
pub mod irr;
pub mod overview;
pub mod sample;

pub use curve::CurveArgs;
pub use derivatives::DerivativesArgs;
pub use irr::IrrArgs;
pub use sample::SampleArgs;

use std::path::PathBuf;

use clap::Args;

/// Balance-sheet input shared by most commands.
#[derive(Args, Debug, Clone, Default)]
pub struct BalanceSheetArgs {
    /// Balance sheet CSV (Product, Type, Amount ($), Rate (%), Maturity (Months)
    /// and optional Duration). Defaults to the built-in sample.
    #[arg(short, long)]
    pub balance_sheet: Option<PathBuf>,
}
