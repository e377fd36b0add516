//! # Downpay Core
//!
//! Calculation core for the Downpay down payment calculator.
//!
//! Given a home price, a down payment (as a percentage or a fixed amount), a
//! loan type and loan terms, the engine resolves the down payment, the loan
//! amount, whether private mortgage insurance applies, and the level monthly
//! payment. Every evaluation also produces two reference scenarios: the loan
//! type's minimum down payment and the recommended 20% down payment.
//!
//! - **Types**: `LoanType`, `LoanTerms`, `DownPaymentSpec`, `CalculationResult`
//! - **Engine**: pure functions, see [`engine`]
//! - **Rates**: caller-side rate selection policy
//! - **Format**: currency and percent rendering for presentation layers
//! - **Input**: sanitising of raw user-typed numbers
//! - **Programs**: static down payment assistance program descriptions
//!
//! ## Design Philosophy
//!
//! - **Infallible engine**: inputs are clamped or coerced, never rejected
//! - **Immutable inputs**: callers own state and pass a fresh record each time
//! - **Presentation stays outside**: the engine returns plain numbers
//!
//! ## Example
//!
//! ```rust
//! use downpay_core::prelude::*;
//!
//! let terms = LoanTerms::for_loan_type(LoanType::Conventional);
//! let scenarios = evaluate_scenarios(
//!     400_000.0,
//!     DownPaymentSpec::percentage(10.0),
//!     LoanType::Conventional,
//!     terms,
//! );
//!
//! assert_eq!(scenarios.user.down_payment_amount, 40_000.0);
//! assert_eq!(scenarios.user.loan_amount, 360_000.0);
//! assert!(scenarios.user.pmi_required);
//! assert_eq!(format_currency(scenarios.user.monthly_payment, &CurrencyFormat::default()), "$2,517");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod programs;
pub mod rates;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{
        evaluate_scenarios, monthly_payment, resolve_down_payment, scenario_at_percent,
        total_interest, CalculatorInput,
    };
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::format::{format_currency, format_percent, format_yes_no, CurrencyFormat};
    pub use crate::input::parse_amount;
    pub use crate::rates::RateSelection;
    pub use crate::types::{
        CalculationResult, DownPaymentKind, DownPaymentSpec, LoanTerms, LoanType,
        ResolvedDownPayment, ScenarioKind, ScenarioSet,
    };
}

// Re-export commonly used types at crate root
pub use error::{CalcError, CalcResult};
pub use types::{CalculationResult, DownPaymentSpec, LoanTerms, LoanType, ScenarioSet};
