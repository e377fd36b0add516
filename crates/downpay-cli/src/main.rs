//! Downpay CLI - Command-line down payment and mortgage payment calculator.
//!
//! # Usage
//!
//! ```bash
//! # 10% down on a $400,000 conventional loan
//! downpay calc --price 400,000 --percent 10
//!
//! # Fixed $25,000 down on an FHA loan at a custom rate
//! downpay calc --price 300000 --amount 25,000 --loan-type fha --rate 6.25
//!
//! # Default rates and minimum down payments
//! downpay rates
//!
//! # Assistance program information
//! downpay programs "FHA Loans"
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use downpay_config::CalculatorConfig;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = CalculatorConfig::load_or_default(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        config,
    };

    match cli.command {
        Commands::Calc(args) => commands::calc::execute(args, &ctx)?,
        Commands::Rates(args) => commands::rates::execute(args, &ctx)?,
        Commands::Programs(args) => commands::programs::execute(args, &ctx)?,
    }

    Ok(())
}
