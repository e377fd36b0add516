//! Downpay Configuration Layer
//!
//! Configuration for the Downpay calculator: loan term, per-loan-type rate
//! overrides and currency display settings, loaded from TOML.
//!
//! # Example
//!
//! ```rust
//! use downpay_config::{CalculatorConfig, Validate};
//! use downpay_core::rates::RateSelection;
//! use downpay_core::types::{LoanTerms, LoanType};
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     term_years = 15
//!
//!     [rates]
//!     fha = 6.5
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(
//!     config.terms_for(LoanType::Fha, RateSelection::Default),
//!     LoanTerms::new(6.5, 15)
//! );
//! ```
//!
//! # Precedence
//!
//! An explicit [`RateSelection::Override`](downpay_core::rates::RateSelection)
//! beats a configured rate, which beats the loan type's built-in default.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod calculator;
mod error;

pub use calculator::{CalculatorConfig, RateOverrides, MAX_TERM_YEARS};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{CalculatorConfig, RateOverrides};
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}
