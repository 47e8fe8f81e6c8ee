//! ALM CLI - Command-line interface for asset-liability risk analytics.
//!
//! # Usage
//!
//! ```bash
//! # Liquidity gap for the sample balance sheet
//! alm liquidity-gap
//!
//! # FTP margins for a bank's own balance sheet, as JSON
//! alm ftp --balance-sheet book.csv --format json
//!
//! # NII and EVE under +200/-50bps shocks
//! alm irr --shock-up 2 --shock-down 0.5
//!
//! # Custom key-rate curve shock
//! alm curve --shock custom --deltas 10,5,0,-5,-10
//!
//! # Revalue the derivatives book after a 1% rate and -3% FX move
//! alm derivatives --irr-shock 1 --fx-shock -3
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

/// Logs go to stderr so table, JSON and CSV output stay clean on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "alm_cli=debug,alm_analytics=debug,alm_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;
    let config = input::load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Overview(args) => commands::overview::execute(args, &config, format)?,
        Commands::LiquidityGap(args) => commands::gap::execute_liquidity(args, &config, format)?,
        Commands::CashFlowGap(args) => commands::gap::execute_cash_flow(args, &config, format)?,
        Commands::Ftp(args) => commands::ftp::execute(args, &config, format)?,
        Commands::DurationGap(args) => commands::duration::execute(args, &config, format)?,
        Commands::Irr(args) => commands::irr::execute(args, &config, format)?,
        Commands::Curve(args) => commands::curve::execute(args, &config, format)?,
        Commands::Derivatives(args) => commands::derivatives::execute(args, &config, format)?,
        Commands::Sample(args) => commands::sample::execute(args)?,
    }

    Ok(())
}
