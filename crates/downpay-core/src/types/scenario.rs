//! Scenario results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::LoanTerms;

/// Down payment percentage below which private mortgage insurance applies.
pub const PMI_THRESHOLD_PERCENT: f64 = 20.0;

/// Down payment percentage used for the recommended scenario.
pub const RECOMMENDED_DOWN_PAYMENT_PERCENT: f64 = 20.0;

/// Figures for one down payment scenario.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Down payment in currency units.
    pub down_payment_amount: f64,
    /// Down payment as a percentage of the home price.
    pub down_payment_percent: f64,
    /// Home price minus down payment.
    pub loan_amount: f64,
    /// Level monthly principal-and-interest payment.
    pub monthly_payment: f64,
    /// True when the down payment is below 20%.
    pub pmi_required: bool,
}

impl CalculationResult {
    /// The all-zero result shown when there is no home price.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of every monthly payment over the term.
    #[must_use]
    pub fn total_of_payments(&self, terms: &LoanTerms) -> f64 {
        self.monthly_payment * f64::from(terms.payment_count())
    }

    /// Interest paid over the term: total of payments less the loan amount.
    #[must_use]
    pub fn total_interest(&self, terms: &LoanTerms) -> f64 {
        if self.loan_amount <= 0.0 {
            return 0.0;
        }
        (self.total_of_payments(terms) - self.loan_amount).max(0.0)
    }
}

/// Which of the three scenarios a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// The loan type's minimum down payment
    Minimum,
    /// The recommended 20% down payment
    Recommended,
    /// The user's own down payment
    User,
}

impl ScenarioKind {
    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::Minimum => "Minimum Down",
            ScenarioKind::Recommended => "Recommended (20%)",
            ScenarioKind::User => "Your Selection",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The three scenarios produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Scenario for the user's own down payment.
    pub user: CalculationResult,
    /// Scenario at the loan type's minimum down payment.
    pub minimum: CalculationResult,
    /// Scenario at the recommended 20% down payment.
    pub recommended: CalculationResult,
}

impl ScenarioSet {
    /// All three scenarios zeroed out.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the result for a scenario.
    #[must_use]
    pub fn get(&self, kind: ScenarioKind) -> &CalculationResult {
        match kind {
            ScenarioKind::Minimum => &self.minimum,
            ScenarioKind::Recommended => &self.recommended,
            ScenarioKind::User => &self.user,
        }
    }

    /// Iterates the scenarios in display order: minimum, recommended, user.
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioKind, &CalculationResult)> {
        [
            ScenarioKind::Minimum,
            ScenarioKind::Recommended,
            ScenarioKind::User,
        ]
        .into_iter()
        .map(move |kind| (kind, self.get(kind)))
    }
}
