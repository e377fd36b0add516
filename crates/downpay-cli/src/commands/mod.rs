//! CLI command implementations.

pub mod calc;
pub mod programs;
pub mod rates;

// Re-export submodules for convenience
pub use calc::CalcArgs;
pub use programs::ProgramsArgs;
pub use rates::RatesArgs;

use downpay_config::{CalculatorConfig, MAX_TERM_YEARS};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers.
    pub quiet: bool,
    /// Loaded configuration.
    pub config: CalculatorConfig,
}

/// Validates an annual interest rate.
pub fn validate_rate(rate: f64) -> CliResult<f64> {
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(CliError::InvalidRate(rate));
    }
    Ok(rate)
}

/// Validates a loan term.
pub fn validate_term(term_years: u32) -> CliResult<u32> {
    if term_years == 0 || term_years > MAX_TERM_YEARS {
        return Err(CliError::InvalidTerm(term_years));
    }
    Ok(term_years)
}
