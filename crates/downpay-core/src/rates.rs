//! Interest rate selection policy.
//!
//! The engine never picks a rate; callers decide which rate goes into
//! [`LoanTerms`]. Selecting a loan type picks up that type's default rate
//! unless the user has typed in their own.

use serde::{Deserialize, Serialize};

use crate::types::{LoanTerms, LoanType};

/// Where the annual interest rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "source", content = "rate_percent", rename_all = "lowercase")]
pub enum RateSelection {
    /// Use the selected loan type's default rate
    #[default]
    Default,
    /// Use an explicit rate, in percent, regardless of loan type
    Override(f64),
}

impl RateSelection {
    /// Returns the annual rate, in percent, for a loan type.
    #[must_use]
    pub fn resolve(&self, loan_type: LoanType) -> f64 {
        match self {
            RateSelection::Default => loan_type.default_rate_percent(),
            RateSelection::Override(rate) => *rate,
        }
    }

    /// Builds loan terms for a loan type and term.
    #[must_use]
    pub fn terms(&self, loan_type: LoanType, term_years: u32) -> LoanTerms {
        LoanTerms::new(self.resolve(loan_type), term_years)
    }

    /// Returns true if the user supplied the rate.
    #[must_use]
    pub fn is_override(&self) -> bool {
        matches!(self, RateSelection::Override(_))
    }
}

impl From<Option<f64>> for RateSelection {
    fn from(rate: Option<f64>) -> Self {
        rate.map_or(RateSelection::Default, RateSelection::Override)
    }
}
