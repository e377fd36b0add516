//! Presentation formatting for calculation results.
//!
//! The engine returns plain `f64` figures; these helpers render them for
//! display. Currency rounding goes through `Decimal` so that halves round
//! away from zero the way browsers' number formatting does.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::types::Currency;

/// Largest number of fraction digits a [`CurrencyFormat`] may request.
pub const MAX_FRACTION_DIGITS: u32 = 20;

/// Currency display settings.
///
/// The default renders whole US dollars (`$2,517`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// ISO 4217 code, e.g. `USD`.
    pub currency_code: String,
    /// Fraction digits always shown.
    pub min_fraction_digits: u32,
    /// Fraction digits the amount is rounded to.
    pub max_fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            currency_code: Currency::USD.code().to_string(),
            min_fraction_digits: 0,
            max_fraction_digits: 0,
        }
    }
}

impl CurrencyFormat {
    /// Creates a validated format.
    pub fn new(
        currency_code: impl Into<String>,
        min_fraction_digits: u32,
        max_fraction_digits: u32,
    ) -> CalcResult<Self> {
        let format = Self {
            currency_code: currency_code.into().to_uppercase(),
            min_fraction_digits,
            max_fraction_digits,
        };
        format.validate()?;
        Ok(format)
    }

    /// Format using the currency's standard number of decimal places.
    #[must_use]
    pub fn for_currency(currency: Currency) -> Self {
        let places = currency.decimal_places();
        Self {
            currency_code: currency.code().to_string(),
            min_fraction_digits: places,
            max_fraction_digits: places,
        }
    }

    /// Checks the currency code shape and the fraction digit bounds.
    pub fn validate(&self) -> CalcResult<()> {
        let code = self.currency_code.as_str();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CalcError::unknown_currency(code));
        }
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(CalcError::invalid_input(
                "max_fraction_digits",
                format!("must not exceed {MAX_FRACTION_DIGITS}"),
            ));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(CalcError::invalid_input(
                "min_fraction_digits",
                "must not exceed max_fraction_digits",
            ));
        }
        Ok(())
    }

    /// Display symbol: a known symbol, or the code followed by a space.
    #[must_use]
    pub fn symbol(&self) -> String {
        match Currency::from_code(&self.currency_code) {
            Some(currency) => currency.symbol().to_string(),
            None => format!("{} ", self.currency_code.to_uppercase()),
        }
    }
}

/// Inserts `,` every three digits of an unsigned integer string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount as currency, e.g. `$1,234` or `-€12.50`.
///
/// Non-finite amounts render as zero.
#[must_use]
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    let max = format.max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let min = format.min_fraction_digits.min(max);
    let amount = if amount.is_finite() { amount } else { 0.0 };

    let (negative, text) = match Decimal::from_f64(amount) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(max, RoundingStrategy::MidpointAwayFromZero);
            (
                rounded.is_sign_negative() && !rounded.is_zero(),
                rounded.abs().to_string(),
            )
        }
        // Outside Decimal's range; fall back to f64 rounding.
        None => (amount < 0.0, format!("{:.*}", max as usize, amount.abs())),
    };

    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min as usize {
        fraction.push('0');
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol());
    out.push_str(&group_digits(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Formats a percentage with a fixed number of decimals, e.g. `10.0%`.
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}%")
}

/// Renders a flag as `Yes` / `No`.
#[must_use]
pub fn format_yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollars() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(2517.1722, &usd), "$2,517");
        assert_eq!(format_currency(40_000.0, &usd), "$40,000");
        assert_eq!(format_currency(0.0, &usd), "$0");
        assert_eq!(format_currency(999.5, &usd), "$1,000");
        assert_eq!(format_currency(1_234_567_890.0, &usd), "$1,234,567,890");
    }

    #[test]
    fn test_negative_amount() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(-1_500.0, &usd), "-$1,500");
        assert_eq!(format_currency(-0.2, &usd), "$0");
    }

    #[test]
    fn test_non_finite_renders_zero() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(f64::NAN, &usd), "$0");
        assert_eq!(format_currency(f64::INFINITY, &usd), "$0");
    }

    #[test]
    fn test_fraction_digits() {
        let cents = CurrencyFormat::new("usd", 2, 2).unwrap();
        assert_eq!(format_currency(1_234.5, &cents), "$1,234.50");
        assert_eq!(format_currency(0.125, &cents), "$0.13");

        let flexible = CurrencyFormat::new("EUR", 0, 2).unwrap();
        assert_eq!(format_currency(12.5, &flexible), "€12.5");
        assert_eq!(format_currency(12.0, &flexible), "€12");
    }

    #[test]
    fn test_unknown_symbol_uses_code() {
        let chf = CurrencyFormat::new("CHF", 0, 0).unwrap();
        assert_eq!(format_currency(1_000.0, &chf), "CHF 1,000");
    }

    #[test]
    fn test_for_currency() {
        let yen = CurrencyFormat::for_currency(Currency::JPY);
        assert_eq!(format_currency(1_234.6, &yen), "¥1,235");
    }

    #[test]
    fn test_validation() {
        assert!(CurrencyFormat::new("US", 0, 0).is_err());
        assert!(CurrencyFormat::new("U$D", 0, 0).is_err());
        assert!(CurrencyFormat::new("USD", 3, 2).is_err());
        assert!(CurrencyFormat::new("USD", 0, 21).is_err());
        assert!(CurrencyFormat::new("USD", 2, 2).is_ok());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0, 1), "10.0%");
        assert_eq!(format_percent(3.456, 1), "3.5%");
        assert_eq!(format_percent(0.0, 0), "0%");
        assert_eq!(format_percent(f64::NAN, 1), "0.0%");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1"), "1");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }
}
