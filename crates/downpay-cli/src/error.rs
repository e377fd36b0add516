//! CLI error types.

use thiserror::Error;

use downpay_config::MAX_TERM_YEARS;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Interest rate outside 0..=100.
    #[error("Invalid interest rate: {0}. Must be between 0 and 100.")]
    InvalidRate(f64),

    /// Loan term outside 1..=MAX_TERM_YEARS.
    #[error("Invalid loan term: {0}. Must be between 1 and {max} years.", max = MAX_TERM_YEARS)]
    InvalidTerm(u32),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
