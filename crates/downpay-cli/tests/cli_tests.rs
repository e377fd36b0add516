//! End-to-end tests for the `downpay` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn downpay() -> Command {
    let mut cmd = Command::cargo_bin("downpay").unwrap();
    cmd.env_remove("DOWNPAY_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn calc_minimal_prints_monthly_payment() {
    downpay()
        .args(["--format", "minimal", "calc", "--price", "400,000", "--percent", "10"])
        .assert()
        .success()
        .stdout("$2,517\n");
}

#[test]
fn calc_table_shows_summary_and_scenarios() {
    downpay()
        .args(["calc", "--price", "400000", "--percent", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40,000"))
        .stdout(predicate::str::contains("$360,000"))
        .stdout(predicate::str::contains("Recommended (20%)"))
        .stdout(predicate::str::contains("$80,000"));
}

#[test]
fn calc_json_reports_fha_minimum() {
    let output = downpay()
        .args([
            "--format",
            "json",
            "calc",
            "--price",
            "300000",
            "--loan-type",
            "fha",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["loan_type"], "fha");
    assert_eq!(report["terms"]["annual_rate_percent"], 7.0);
    assert_eq!(report["scenarios"]["minimum"]["down_payment_amount"], 10500.0);
    assert_eq!(report["scenarios"]["minimum"]["loan_amount"], 289500.0);
}

#[test]
fn calc_zero_rate_is_straight_line() {
    downpay()
        .args([
            "--format", "minimal", "calc", "--price", "372000", "--amount", "12,000", "--rate",
            "0",
        ])
        .assert()
        .success()
        .stdout("$1,000\n");
}

#[test]
fn calc_unparseable_price_gives_zero() {
    downpay()
        .args(["--format", "minimal", "calc", "--price", "abc"])
        .assert()
        .success()
        .stdout("$0\n");
}

#[test]
fn calc_rejects_unknown_loan_type() {
    downpay()
        .args(["calc", "--price", "300000", "--loan-type", "jumbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown loan type"));
}

#[test]
fn calc_rejects_percent_with_amount() {
    downpay()
        .args(["calc", "--price", "300000", "--percent", "5", "--amount", "1000"])
        .assert()
        .failure();
}

#[test]
fn calc_rejects_out_of_range_rate() {
    downpay()
        .args(["calc", "--price", "300000", "--rate", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid interest rate"));
}

#[test]
fn calc_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downpay.toml");
    std::fs::write(
        &path,
        "term_years = 1\n\n[rates]\nconventional = 0.0\n",
    )
    .unwrap();

    downpay()
        .args(["--format", "minimal", "--config"])
        .arg(&path)
        .args(["calc", "--price", "12000", "--percent", "0"])
        .assert()
        .success()
        .stdout("$1,000\n");
}

#[test]
fn rates_lists_every_loan_type() {
    downpay()
        .args(["--format", "csv", "rates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conventional"))
        .stdout(predicate::str::contains("fha"))
        .stdout(predicate::str::contains("va"))
        .stdout(predicate::str::contains("usda"))
        .stdout(predicate::str::contains("3.5%"));
}

#[test]
fn programs_shows_known_program() {
    downpay()
        .args(["programs", "VA Loans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0% down payment required"))
        .stdout(predicate::str::contains("https://www.va.gov/housing-assistance/home-loans/"));
}

#[test]
fn programs_falls_back_for_unknown_program() {
    downpay()
        .args(["--format", "json", "programs", "State Grants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://www.hud.gov/"));
}

#[test]
fn calc_currency_uses_standard_decimals() {
    downpay()
        .args([
            "--format", "minimal", "calc", "--price", "400000", "--percent", "10", "--currency",
            "EUR",
        ])
        .assert()
        .success()
        .stdout("€2,517.17\n");
}

#[test]
fn calc_rejects_unknown_currency() {
    downpay()
        .args(["calc", "--price", "400000", "--currency", "XYZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown currency code"));
}

#[test]
fn calc_configured_rate_is_marked_custom_in_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("downpay.toml");
    std::fs::write(&path, "[rates]\nfha = 6.0\n").unwrap();

    downpay()
        .arg("--config")
        .arg(&path)
        .args(["calc", "--price", "300000", "--loan-type", "fha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.00% (custom)"));

    let output = downpay()
        .args(["--format", "json", "--config"])
        .arg(&path)
        .args(["calc", "--price", "300000", "--loan-type", "fha"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["rate_overridden"], true);
}
