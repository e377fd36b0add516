//! Configuration file loading tests.

use std::io::Write;

use downpay_config::{CalculatorConfig, ConfigError};
use downpay_core::rates::RateSelection;
use downpay_core::types::{LoanTerms, LoanType};

#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
term_years = 20
percent_decimals = 2

[rates]
conventional = 6.75
"#
    )
    .unwrap();

    let config = CalculatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.term_years, 20);
    assert_eq!(config.percent_decimals, 2);
    assert_eq!(
        config.terms_for(LoanType::Conventional, RateSelection::Default),
        LoanTerms::new(6.75, 20)
    );
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = CalculatorConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn load_or_default_without_path() {
    let config = CalculatorConfig::load_or_default(None).unwrap();
    assert_eq!(config, CalculatorConfig::default());
}

#[test]
fn written_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downpay.toml");

    let config = CalculatorConfig::default()
        .with_term_years(25)
        .with_rate(LoanType::Usda, 6.9);
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(CalculatorConfig::load_or_default(Some(path.as_path())).unwrap(), config);
}
