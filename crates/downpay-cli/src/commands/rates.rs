//! Rates command implementation.
//!
//! Lists each loan type with its default rate, the rate in effect after
//! configuration, and its minimum down payment.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use downpay_config::CalculatorConfig;
use downpay_core::format::format_percent;
use downpay_core::types::LoanType;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Show a single loan type
    #[arg(short, long)]
    pub loan_type: Option<LoanType>,
}

/// One loan type's rate information.
#[derive(Debug, Serialize, Tabled)]
pub struct RateRow {
    #[tabled(rename = "Loan Type")]
    pub loan_type: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Default Rate")]
    pub default_rate: String,
    #[tabled(rename = "Rate In Use")]
    pub rate_in_use: String,
    #[tabled(rename = "Minimum Down")]
    pub minimum_down_payment: String,
}

fn rate_row(loan_type: LoanType, config: &CalculatorConfig) -> RateRow {
    let in_use = config.rate_selection(loan_type).resolve(loan_type);
    RateRow {
        loan_type: loan_type.to_string(),
        code: loan_type.code().to_string(),
        default_rate: format_percent(loan_type.default_rate_percent(), 2),
        rate_in_use: format_percent(in_use, 2),
        minimum_down_payment: format_percent(loan_type.minimum_down_payment_percent(), 1),
    }
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, ctx: &Context) -> Result<()> {
    let rows: Vec<RateRow> = match args.loan_type {
        Some(loan_type) => vec![rate_row(loan_type, &ctx.config)],
        None => LoanType::ALL
            .iter()
            .map(|loan_type| rate_row(*loan_type, &ctx.config))
            .collect(),
    };

    match ctx.format {
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {}", row.code, row.rate_in_use);
            }
        }
        OutputFormat::Table => {
            print_header("Loan Types", ctx.quiet);
            print_output(&rows, ctx.format)?;
        }
        _ => print_output(&rows, ctx.format)?,
    }

    Ok(())
}
