//! Calculator configuration types.
//!
//! This module defines the settings that sit around the calculation engine:
//! loan term, per-loan-type rate overrides and currency display.

use std::path::Path;

use serde::{Deserialize, Serialize};

use downpay_core::format::CurrencyFormat;
use downpay_core::rates::RateSelection;
use downpay_core::types::{LoanTerms, LoanType, DEFAULT_TERM_YEARS};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Longest loan term accepted, in years.
pub const MAX_TERM_YEARS: u32 = 50;

// =============================================================================
// RATE OVERRIDES
// =============================================================================

/// Per-loan-type annual rates that replace the built-in defaults.
///
/// Unset entries fall back to the loan type's default rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateOverrides {
    /// Conventional loan rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventional: Option<f64>,
    /// FHA loan rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fha: Option<f64>,
    /// VA loan rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub va: Option<f64>,
    /// USDA loan rate, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usda: Option<f64>,
}

impl RateOverrides {
    /// Returns the override for a loan type, if any.
    #[must_use]
    pub fn get(&self, loan_type: LoanType) -> Option<f64> {
        match loan_type {
            LoanType::Conventional => self.conventional,
            LoanType::Fha => self.fha,
            LoanType::Va => self.va,
            LoanType::Usda => self.usda,
        }
    }

    /// Sets the override for a loan type.
    pub fn set(&mut self, loan_type: LoanType, rate_percent: Option<f64>) {
        let slot = match loan_type {
            LoanType::Conventional => &mut self.conventional,
            LoanType::Fha => &mut self.fha,
            LoanType::Va => &mut self.va,
            LoanType::Usda => &mut self.usda,
        };
        *slot = rate_percent;
    }
}

// =============================================================================
// CALCULATOR CONFIGURATION
// =============================================================================

/// Settings for a calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Loan term in years applied to every scenario.
    #[serde(default = "default_term_years")]
    pub term_years: u32,

    /// Decimals shown for the down payment percentage.
    #[serde(default = "default_percent_decimals")]
    pub percent_decimals: u32,

    /// Currency display settings.
    #[serde(default)]
    pub currency: CurrencyFormat,

    /// Rate overrides per loan type.
    #[serde(default)]
    pub rates: RateOverrides,
}

fn default_term_years() -> u32 {
    DEFAULT_TERM_YEARS
}

fn default_percent_decimals() -> u32 {
    1
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            term_years: default_term_years(),
            percent_decimals: default_percent_decimals(),
            currency: CurrencyFormat::default(),
            rates: RateOverrides::default(),
        }
    }
}

impl CalculatorConfig {
    /// Parses a configuration from TOML and validates it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("loading calculator configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builder method to set the loan term.
    #[must_use]
    pub fn with_term_years(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Builder method to set the currency format.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    /// Builder method to override a loan type's rate.
    #[must_use]
    pub fn with_rate(mut self, loan_type: LoanType, rate_percent: f64) -> Self {
        self.rates.set(loan_type, Some(rate_percent));
        self
    }

    /// Rate selection for a loan type: the configured override, or its default.
    #[must_use]
    pub fn rate_selection(&self, loan_type: LoanType) -> RateSelection {
        RateSelection::from(self.rates.get(loan_type))
    }

    /// Loan terms for a loan type.
    ///
    /// An explicit `selection` override wins over the configured rate.
    #[must_use]
    pub fn terms_for(&self, loan_type: LoanType, selection: RateSelection) -> LoanTerms {
        let selection = if selection.is_override() {
            selection
        } else {
            self.rate_selection(loan_type)
        };
        selection.terms(loan_type, self.term_years)
    }
}

fn validate_rate(field: &str, rate: f64, errors: &mut Vec<ValidationError>) {
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        errors.push(ValidationError::with_rule(
            field,
            format!("Rate {rate} must be between 0 and 100 percent"),
            "valid_rate",
        ));
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            errors.push(ValidationError::with_rule(
                "term_years",
                format!("Term must be between 1 and {MAX_TERM_YEARS} years"),
                "valid_term",
            ));
        }

        if self.percent_decimals > 6 {
            errors.push(ValidationError::with_rule(
                "percent_decimals",
                "Percent decimals cannot exceed 6",
                "max_precision",
            ));
        }

        if let Err(err) = self.currency.validate() {
            errors.push(ValidationError::with_rule(
                "currency",
                err.to_string(),
                "valid_currency",
            ));
        }

        for loan_type in LoanType::ALL {
            if let Some(rate) = self.rates.get(loan_type) {
                validate_rate(&format!("rates.{}", loan_type.code()), rate, &mut errors);
            }
        }

        errors
    }
}
