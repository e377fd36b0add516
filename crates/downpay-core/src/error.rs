//! Error types for the Downpay core.
//!
//! The calculation engine itself never fails; these errors only surface at
//! parse boundaries where raw text is turned into typed inputs.

use thiserror::Error;

/// A specialized Result type for Downpay operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The main error type for Downpay parse and validation boundaries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Loan type code not recognised.
    #[error("Unknown loan type: {code} (expected conventional, fha, va or usda)")]
    UnknownLoanType {
        /// The code that failed to parse.
        code: String,
    },

    /// Currency code is not a three-letter ISO 4217 code.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The rejected code.
        code: String,
    },

    /// A caller-supplied value is outside what the engine accepts.
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// Description of the problem.
        reason: String,
    },
}

impl CalcError {
    /// Creates an unknown loan type error.
    #[must_use]
    pub fn unknown_loan_type(code: impl Into<String>) -> Self {
        Self::UnknownLoanType { code: code.into() }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
