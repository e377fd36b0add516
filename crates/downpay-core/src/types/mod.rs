//! Domain types for down payment and mortgage calculations.
//!
//! - [`LoanType`]: Conventional, FHA, VA or USDA loan programme
//! - [`LoanTerms`]: Annual interest rate and term in years
//! - [`DownPaymentSpec`]: Down payment as a percentage or a fixed amount
//! - [`CalculationResult`]: Figures for a single scenario
//! - [`ScenarioSet`]: User, minimum and recommended scenarios
//! - [`Currency`]: ISO currency codes used for display

mod currency;
mod down_payment;
mod loan;
mod scenario;

pub use currency::Currency;
pub use down_payment::{DownPaymentKind, DownPaymentSpec, ResolvedDownPayment};
pub use loan::{LoanTerms, LoanType, DEFAULT_TERM_YEARS};
pub use scenario::{
    CalculationResult, ScenarioKind, ScenarioSet, PMI_THRESHOLD_PERCENT,
    RECOMMENDED_DOWN_PAYMENT_PERCENT,
};
