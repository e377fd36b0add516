//! Calc command implementation.
//!
//! Resolves the down payment and prints the user, minimum and recommended
//! scenarios.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use downpay_config::CalculatorConfig;
use downpay_core::engine::CalculatorInput;
use downpay_core::format::{format_currency, format_percent, format_yes_no, CurrencyFormat};
use downpay_core::input::parse_amount;
use downpay_core::rates::RateSelection;
use downpay_core::types::{
    CalculationResult, Currency, DownPaymentSpec, LoanTerms, LoanType, ScenarioSet,
};

use crate::cli::OutputFormat;
use crate::commands::{validate_rate, validate_term, Context};
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the calc command.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Home price. Thousands separators and a leading $ are accepted.
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,

    /// Down payment as a percentage of the home price (default: 20)
    #[arg(long, conflicts_with = "amount", allow_hyphen_values = true)]
    pub percent: Option<String>,

    /// Down payment as a fixed amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Loan type: conventional, fha, va or usda
    #[arg(short, long, default_value = "conventional")]
    pub loan_type: LoanType,

    /// Annual interest rate in percent. Defaults to the loan type's rate.
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Loan term in years. Defaults to the configured term.
    #[arg(short, long)]
    pub term: Option<u32>,

    /// Display currency (USD, EUR, GBP, JPY, CAD, AUD) with its standard decimals
    #[arg(long)]
    pub currency: Option<Currency>,
}

/// One row of the scenario comparison.
#[derive(Debug, Serialize, Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    pub scenario: String,
    #[tabled(rename = "Down Payment")]
    pub down_payment: String,
    #[tabled(rename = "Down %")]
    pub down_payment_percent: String,
    #[tabled(rename = "Loan Amount")]
    pub loan_amount: String,
    #[tabled(rename = "Monthly Payment")]
    pub monthly_payment: String,
    #[tabled(rename = "PMI")]
    pub pmi: String,
}

/// Machine-readable calculation report.
#[derive(Debug, Serialize)]
pub struct CalcReport {
    pub home_price: f64,
    pub loan_type: LoanType,
    pub down_payment: DownPaymentSpec,
    pub terms: LoanTerms,
    pub rate_overridden: bool,
    pub scenarios: ScenarioSet,
    pub total_interest: f64,
}

fn down_payment_spec(args: &CalcArgs) -> DownPaymentSpec {
    match (&args.percent, &args.amount) {
        (Some(percent), _) => DownPaymentSpec::percentage(parse_amount(percent)),
        (None, Some(amount)) => DownPaymentSpec::amount(parse_amount(amount)),
        (None, None) => DownPaymentSpec::default(),
    }
}

fn percent_text(result: &CalculationResult, home_price: f64, config: &CalculatorConfig) -> String {
    // With no home price there is nothing to express a percentage of.
    if home_price == 0.0 {
        return format_percent(0.0, 0);
    }
    format_percent(result.down_payment_percent, config.percent_decimals as usize)
}

fn summary_rows(
    input: &CalculatorInput,
    scenarios: &ScenarioSet,
    rate_overridden: bool,
    config: &CalculatorConfig,
) -> Vec<KeyValue> {
    let currency = &config.currency;
    let user = &scenarios.user;
    let rate_note = if rate_overridden { " (custom)" } else { "" };

    vec![
        KeyValue::new("Home Price", format_currency(input.home_price, currency)),
        KeyValue::new("Loan Type", input.loan_type.to_string()),
        KeyValue::new(
            "Interest Rate",
            format!("{:.2}%{rate_note}", input.terms.annual_rate_percent),
        ),
        KeyValue::new("Term", format!("{} years", input.terms.term_years)),
        KeyValue::new(
            "Down Payment",
            format_currency(user.down_payment_amount, currency),
        ),
        KeyValue::new(
            "Down Payment %",
            percent_text(user, input.home_price, config),
        ),
        KeyValue::new("Loan Amount", format_currency(user.loan_amount, currency)),
        KeyValue::new(
            "Monthly Payment",
            format_currency(user.monthly_payment, currency),
        ),
        KeyValue::new("PMI Required", format_yes_no(user.pmi_required)),
        KeyValue::new(
            "Total Interest",
            format_currency(user.total_interest(&input.terms), currency),
        ),
    ]
}

fn scenario_rows(
    input: &CalculatorInput,
    scenarios: &ScenarioSet,
    config: &CalculatorConfig,
) -> Vec<ScenarioRow> {
    let currency = &config.currency;
    scenarios
        .iter()
        .map(|(kind, result)| ScenarioRow {
            scenario: kind.label().to_string(),
            down_payment: format_currency(result.down_payment_amount, currency),
            down_payment_percent: percent_text(result, input.home_price, config),
            loan_amount: format_currency(result.loan_amount, currency),
            monthly_payment: format_currency(result.monthly_payment, currency),
            pmi: format_yes_no(result.pmi_required).to_string(),
        })
        .collect()
}

/// True when the rate in use is not the loan type's built-in default.
fn rate_overridden(
    selection: RateSelection,
    loan_type: LoanType,
    config: &CalculatorConfig,
) -> bool {
    selection.is_override() || config.rates.get(loan_type).is_some()
}

/// Execute the calc command.
pub fn execute(args: CalcArgs, ctx: &Context) -> Result<()> {
    let home_price = parse_amount(&args.price);
    if home_price == 0.0 && !args.price.trim().is_empty() {
        tracing::warn!(raw = %args.price, "home price is not a positive number; results are zero");
    }

    let selection = RateSelection::from(args.rate.map(validate_rate).transpose()?);
    let mut config = match args.term {
        Some(term) => ctx.config.clone().with_term_years(validate_term(term)?),
        None => ctx.config.clone(),
    };
    if let Some(currency) = args.currency {
        config = config.with_currency(CurrencyFormat::for_currency(currency));
    }
    let custom_rate = rate_overridden(selection, args.loan_type, &config);

    let input = CalculatorInput::new(home_price, down_payment_spec(&args), args.loan_type)
        .with_terms(config.terms_for(args.loan_type, selection));
    tracing::debug!(?input, "evaluating calculator input");

    let scenarios = input.evaluate();

    match ctx.format {
        OutputFormat::Table => {
            print_header("Down Payment Summary", ctx.quiet);
            print_output(
                &summary_rows(&input, &scenarios, custom_rate, &config),
                ctx.format,
            )?;
            print_header("Scenarios", ctx.quiet);
            print_output(&scenario_rows(&input, &scenarios, &config), ctx.format)?;
        }
        OutputFormat::Json => {
            let report = CalcReport {
                home_price: input.home_price,
                loan_type: input.loan_type,
                down_payment: input.down_payment,
                terms: input.terms,
                rate_overridden: custom_rate,
                scenarios,
                total_interest: scenarios.user.total_interest(&input.terms),
            };
            print_single(&report)?;
        }
        OutputFormat::Csv => {
            print_output(&scenario_rows(&input, &scenarios, &config), ctx.format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "{}",
                format_currency(scenarios.user.monthly_payment, &config.currency)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(price: &str) -> CalcArgs {
        CalcArgs {
            price: price.to_string(),
            percent: None,
            amount: None,
            loan_type: LoanType::Conventional,
            rate: None,
            term: None,
            currency: None,
        }
    }

    #[test]
    fn test_down_payment_defaults_to_twenty_percent() {
        assert_eq!(down_payment_spec(&args("400000")), DownPaymentSpec::percentage(20.0));
    }

    #[test]
    fn test_down_payment_amount_accepts_separators() {
        let mut a = args("400000");
        a.amount = Some("$25,000".to_string());
        assert_eq!(down_payment_spec(&a), DownPaymentSpec::amount(25_000.0));
    }

    #[test]
    fn test_summary_rows() {
        let config = CalculatorConfig::default();
        let input = CalculatorInput::new(
            400_000.0,
            DownPaymentSpec::percentage(10.0),
            LoanType::Conventional,
        );
        let scenarios = input.evaluate();
        let rows = summary_rows(&input, &scenarios, false, &config);

        let value = |key: &str| {
            rows.iter()
                .find(|r| r.key == key)
                .map(|r| r.value.clone())
                .unwrap()
        };
        assert_eq!(value("Down Payment"), "$40,000");
        assert_eq!(value("Down Payment %"), "10.0%");
        assert_eq!(value("Loan Amount"), "$360,000");
        assert_eq!(value("Monthly Payment"), "$2,517");
        assert_eq!(value("PMI Required"), "Yes");
        assert_eq!(value("Interest Rate"), "7.50%");
    }

    #[test]
    fn test_configured_rate_counts_as_custom() {
        let config = CalculatorConfig::default().with_rate(LoanType::Fha, 6.0);
        assert!(rate_overridden(RateSelection::Default, LoanType::Fha, &config));
        assert!(!rate_overridden(RateSelection::Default, LoanType::Va, &config));
        assert!(rate_overridden(
            RateSelection::Override(5.0),
            LoanType::Va,
            &CalculatorConfig::default()
        ));

        let input = CalculatorInput::new(300_000.0, DownPaymentSpec::default(), LoanType::Fha)
            .with_terms(config.terms_for(LoanType::Fha, RateSelection::Default));
        let rows = summary_rows(&input, &input.evaluate(), true, &config);
        let rate = rows.iter().find(|r| r.key == "Interest Rate").unwrap();
        assert_eq!(rate.value, "6.00% (custom)");
    }

    #[test]
    fn test_scenario_rows_for_zero_price() {
        let config = CalculatorConfig::default();
        let input = CalculatorInput::new(0.0, DownPaymentSpec::default(), LoanType::Fha);
        let rows = scenario_rows(&input, &input.evaluate(), &config);

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.down_payment, "$0");
            assert_eq!(row.down_payment_percent, "0%");
            assert_eq!(row.monthly_payment, "$0");
            assert_eq!(row.pmi, "No");
        }
    }
}
