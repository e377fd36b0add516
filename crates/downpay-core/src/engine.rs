//! Mortgage calculation engine.
//!
//! Pure functions that turn a home price, a down payment and loan terms into
//! down payment, loan amount, PMI and monthly payment figures. Nothing here
//! fails: negative or non-finite numbers are coerced to zero and percentages
//! and amounts are clamped to their valid ranges.
//!
//! # Example
//!
//! ```rust
//! use downpay_core::engine::{monthly_payment, resolve_down_payment};
//! use downpay_core::types::DownPaymentSpec;
//!
//! let down = resolve_down_payment(300_000.0, DownPaymentSpec::amount(450_000.0));
//! assert_eq!(down.amount, 300_000.0);
//! assert_eq!(down.percent, 100.0);
//!
//! assert_eq!(monthly_payment(12_000.0, 0.0, 1), 1_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{
    CalculationResult, DownPaymentKind, DownPaymentSpec, LoanTerms, LoanType,
    ResolvedDownPayment, ScenarioSet, PMI_THRESHOLD_PERCENT, RECOMMENDED_DOWN_PAYMENT_PERCENT,
};

/// Coerces negative, NaN and infinite inputs to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Resolves a down payment against a home price.
///
/// A percentage is capped at 100 and converted to an amount; an amount is
/// capped at the home price and converted to a percentage.
///
/// With a zero home price an amount resolves to `0` / `0%`, while a
/// percentage keeps its clamped value with a zero amount. Callers that need
/// the all-zero view of a missing price use [`evaluate_scenarios`].
///
/// The amount never exceeds the home price, including prices near `f64::MAX`.
#[must_use]
pub fn resolve_down_payment(home_price: f64, spec: DownPaymentSpec) -> ResolvedDownPayment {
    let home_price = non_negative(home_price);
    let value = non_negative(spec.value);

    match spec.kind {
        DownPaymentKind::Percentage => {
            let percent = value.min(100.0);
            let mut amount = home_price * percent / 100.0;
            if !amount.is_finite() {
                amount = home_price / 100.0 * percent;
            }
            ResolvedDownPayment {
                amount: amount.min(home_price),
                percent,
            }
        }
        DownPaymentKind::Amount => {
            let amount = value.min(home_price);
            let percent = if home_price > 0.0 {
                amount / home_price * 100.0
            } else {
                0.0
            };
            ResolvedDownPayment { amount, percent }
        }
    }
}

/// Level monthly payment of a fixed-rate loan.
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate
/// and `n` the number of monthly payments. A loan of zero or less has no
/// payment. A zero rate repays the principal in `n` equal instalments.
/// Negative rates are treated as zero and terms below one year as one year.
#[must_use]
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    if !loan_amount.is_finite() || loan_amount <= 0.0 {
        return 0.0;
    }

    let payments = f64::from(LoanTerms::new(annual_rate_percent, term_years).payment_count());
    let monthly_rate = non_negative(annual_rate_percent) / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return loan_amount / payments;
    }

    let growth = (1.0 + monthly_rate).powf(payments);
    // Rates too small to move (1 + r) behave like a zero rate.
    if growth <= 1.0 {
        log::debug!("monthly rate {monthly_rate:e} below f64 resolution; using straight-line payment");
        return loan_amount / payments;
    }
    // (1 + r)^n overflowed; the payment tends to interest-only.
    if !growth.is_finite() {
        return loan_amount * monthly_rate;
    }

    loan_amount * (monthly_rate * growth / (growth - 1.0))
}

/// Interest paid over the full term of a fixed-rate loan.
#[must_use]
pub fn total_interest(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let terms = LoanTerms::new(annual_rate_percent, term_years);
    let payment = monthly_payment(loan_amount, annual_rate_percent, term_years);
    if payment == 0.0 {
        return 0.0;
    }
    (payment * f64::from(terms.payment_count()) - loan_amount).max(0.0)
}

fn scenario(home_price: f64, down: ResolvedDownPayment, terms: LoanTerms) -> CalculationResult {
    let loan_amount = home_price - down.amount;
    CalculationResult {
        down_payment_amount: down.amount,
        down_payment_percent: down.percent,
        loan_amount,
        monthly_payment: monthly_payment(loan_amount, terms.annual_rate_percent, terms.term_years),
        pmi_required: down.percent < PMI_THRESHOLD_PERCENT,
    }
}

/// Builds a scenario with the down payment fixed at `percent` of the home price.
#[must_use]
pub fn scenario_at_percent(home_price: f64, percent: f64, terms: LoanTerms) -> CalculationResult {
    let home_price = non_negative(home_price);
    scenario(
        home_price,
        resolve_down_payment(home_price, DownPaymentSpec::percentage(percent)),
        terms,
    )
}

/// Evaluates the user, minimum and recommended scenarios.
///
/// All three scenarios use the same loan terms: the rate depends on the loan
/// type, not on the size of the down payment. A zero home price yields three
/// zero results with no PMI.
#[must_use]
pub fn evaluate_scenarios(
    home_price: f64,
    user_spec: DownPaymentSpec,
    loan_type: LoanType,
    loan_terms: LoanTerms,
) -> ScenarioSet {
    let home_price = non_negative(home_price);
    if home_price == 0.0 {
        return ScenarioSet::zero();
    }

    log::trace!(
        "evaluating scenarios: price={home_price}, down={}:{}, loan_type={}, rate={}%, term={}y",
        user_spec.kind,
        user_spec.value,
        loan_type.code(),
        loan_terms.annual_rate_percent,
        loan_terms.term_years
    );

    ScenarioSet {
        user: scenario(
            home_price,
            resolve_down_payment(home_price, user_spec),
            loan_terms,
        ),
        minimum: scenario_at_percent(
            home_price,
            loan_type.minimum_down_payment_percent(),
            loan_terms,
        ),
        recommended: scenario_at_percent(home_price, RECOMMENDED_DOWN_PAYMENT_PERCENT, loan_terms),
    }
}

/// Everything the engine needs for one recomputation.
///
/// The presentation layer owns the live input state and builds a fresh
/// record whenever something changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Home price in currency units.
    pub home_price: f64,
    /// User's down payment.
    pub down_payment: DownPaymentSpec,
    /// Selected loan programme.
    pub loan_type: LoanType,
    /// Rate and term applied to every scenario.
    pub terms: LoanTerms,
}

impl CalculatorInput {
    /// Creates an input with the loan type's default terms.
    #[must_use]
    pub fn new(home_price: f64, down_payment: DownPaymentSpec, loan_type: LoanType) -> Self {
        Self {
            home_price,
            down_payment,
            loan_type,
            terms: LoanTerms::for_loan_type(loan_type),
        }
    }

    /// Replaces the loan terms.
    #[must_use]
    pub fn with_terms(mut self, terms: LoanTerms) -> Self {
        self.terms = terms;
        self
    }

    /// Runs [`evaluate_scenarios`] on this input.
    #[must_use]
    pub fn evaluate(&self) -> ScenarioSet {
        evaluate_scenarios(self.home_price, self.down_payment, self.loan_type, self.terms)
    }
}
