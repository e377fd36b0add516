//! Down payment specification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a down payment value is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownPaymentKind {
    /// Percentage of the home price (clamped to 0..=100)
    #[default]
    Percentage,
    /// Fixed currency amount (clamped to 0..=home price)
    Amount,
}

impl fmt::Display for DownPaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownPaymentKind::Percentage => write!(f, "percentage"),
            DownPaymentKind::Amount => write!(f, "amount"),
        }
    }
}

/// A down payment as entered by the user.
///
/// The value is stored as given; clamping happens when it is resolved against
/// a home price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DownPaymentSpec {
    /// Whether `value` is a percentage or an amount.
    pub kind: DownPaymentKind,
    /// Percentage points or currency units, depending on `kind`.
    pub value: f64,
}

impl DownPaymentSpec {
    /// Down payment as a percentage of the home price.
    #[must_use]
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: DownPaymentKind::Percentage,
            value,
        }
    }

    /// Down payment as a fixed amount.
    #[must_use]
    pub fn amount(value: f64) -> Self {
        Self {
            kind: DownPaymentKind::Amount,
            value,
        }
    }
}

impl Default for DownPaymentSpec {
    fn default() -> Self {
        Self::percentage(20.0)
    }
}

/// A down payment resolved against a home price.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedDownPayment {
    /// Down payment in currency units.
    pub amount: f64,
    /// Down payment as a percentage of the home price.
    pub percent: f64,
}
