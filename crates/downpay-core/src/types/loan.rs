//! Loan type and loan terms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Standard mortgage term in years.
pub const DEFAULT_TERM_YEARS: u32 = 30;

/// Mortgage loan programme.
///
/// Each programme carries a default interest rate and a minimum down payment
/// percentage used for the "minimum" reference scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    /// Conventional conforming loan
    #[default]
    Conventional,
    /// Federal Housing Administration loan
    Fha,
    /// Veterans Affairs loan
    Va,
    /// US Department of Agriculture rural housing loan
    Usda,
}

impl LoanType {
    /// All loan types in display order.
    pub const ALL: [LoanType; 4] = [
        LoanType::Conventional,
        LoanType::Fha,
        LoanType::Va,
        LoanType::Usda,
    ];

    /// Returns the default annual interest rate, in percent.
    #[must_use]
    pub fn default_rate_percent(&self) -> f64 {
        match self {
            LoanType::Conventional => 7.5,
            LoanType::Fha => 7.0,
            LoanType::Va => 6.8,
            LoanType::Usda => 7.2,
        }
    }

    /// Returns the minimum down payment, in percent of the home price.
    ///
    /// FHA allows 3.5%; every other programme uses the 5% conventional-style
    /// minimum. VA and USDA loans often allow 0% down in practice, but the
    /// calculator applies the single rule uniformly.
    #[must_use]
    pub fn minimum_down_payment_percent(&self) -> f64 {
        match self {
            LoanType::Fha => 3.5,
            _ => 5.0,
        }
    }

    /// Returns the lowercase code used in configuration files and on the command line.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoanType::Conventional => "conventional",
            LoanType::Fha => "fha",
            LoanType::Va => "va",
            LoanType::Usda => "usda",
        }
    }

    /// Parses a loan type from its code, ignoring case.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "conventional" => Some(LoanType::Conventional),
            "fha" => Some(LoanType::Fha),
            "va" => Some(LoanType::Va),
            "usda" => Some(LoanType::Usda),
            _ => None,
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanType::Conventional => "Conventional",
            LoanType::Fha => "FHA",
            LoanType::Va => "VA",
            LoanType::Usda => "USDA",
        };
        write!(f, "{name}")
    }
}

impl FromStr for LoanType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CalcError::unknown_loan_type(s))
    }
}

/// Interest rate and term of a fixed-rate mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Annual interest rate in percent (7.5 = 7.5%).
    pub annual_rate_percent: f64,
    /// Loan term in whole years.
    pub term_years: u32,
}

impl LoanTerms {
    /// Creates loan terms from a rate and term.
    #[must_use]
    pub fn new(annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            annual_rate_percent,
            term_years,
        }
    }

    /// Default terms for a loan type: its default rate over a 30-year term.
    #[must_use]
    pub fn for_loan_type(loan_type: LoanType) -> Self {
        Self::new(loan_type.default_rate_percent(), DEFAULT_TERM_YEARS)
    }

    /// Returns a copy with a different rate.
    #[must_use]
    pub fn with_rate(mut self, annual_rate_percent: f64) -> Self {
        self.annual_rate_percent = annual_rate_percent;
        self
    }

    /// Returns a copy with a different term.
    #[must_use]
    pub fn with_term(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Number of monthly payments. Terms below one year count as one year.
    #[must_use]
    pub fn payment_count(&self) -> u32 {
        self.term_years.max(1).saturating_mul(12)
    }
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self::for_loan_type(LoanType::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        assert_eq!(LoanType::Conventional.default_rate_percent(), 7.5);
        assert_eq!(LoanType::Fha.default_rate_percent(), 7.0);
        assert_eq!(LoanType::Va.default_rate_percent(), 6.8);
        assert_eq!(LoanType::Usda.default_rate_percent(), 7.2);
    }

    #[test]
    fn test_minimum_down_payment() {
        assert_eq!(LoanType::Fha.minimum_down_payment_percent(), 3.5);
        assert_eq!(LoanType::Conventional.minimum_down_payment_percent(), 5.0);
        assert_eq!(LoanType::Va.minimum_down_payment_percent(), 5.0);
        assert_eq!(LoanType::Usda.minimum_down_payment_percent(), 5.0);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LoanType::from_code("FHA"), Some(LoanType::Fha));
        assert_eq!(LoanType::from_code(" usda "), Some(LoanType::Usda));
        assert_eq!(LoanType::from_code("jumbo"), None);
        assert!("".parse::<LoanType>().is_err());
        assert_eq!("va".parse::<LoanType>(), Ok(LoanType::Va));
    }

    #[test]
    fn test_code_round_trips_through_parse() {
        for loan_type in LoanType::ALL {
            assert_eq!(loan_type.code().parse::<LoanType>(), Ok(loan_type));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LoanType::Fha.to_string(), "FHA");
        assert_eq!(LoanType::Conventional.to_string(), "Conventional");
    }

    #[test]
    fn test_terms_for_loan_type() {
        let terms = LoanTerms::for_loan_type(LoanType::Va);
        assert_eq!(terms.annual_rate_percent, 6.8);
        assert_eq!(terms.term_years, DEFAULT_TERM_YEARS);
        assert_eq!(terms.payment_count(), 360);
    }

    #[test]
    fn test_zero_term_clamps_to_one_year() {
        assert_eq!(LoanTerms::new(5.0, 0).payment_count(), 12);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&LoanType::Fha).unwrap();
        assert_eq!(json, "\"fha\"");
    }
}
