//! CLI Smoke Test
//!
//! Runs the built binary against a temporary rate file and checks the
//! rendered output of each command.

use std::process::{Command, Output};

use crate::common::write_temp_file;

fn run_cli(args: &[&str]) -> Output {
    // Run outside the repo so no stray wallet-units.toml is picked up
    let workdir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_wallet-units"))
        .args(args)
        .current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("UNITS_DISPLAY__FIAT_CURRENCY")
        .env_remove("UNITS_DISPLAY__SHOW_ALL_DECIMAL_PLACES")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_show_defaults_to_sats() {
    let output = run_cli(&["show", "1234567"]);
    assert_eq!(stdout_of(&output).trim(), "1,234,567 sats");
}

#[test]
fn test_show_cycles_to_btc() {
    let output = run_cli(&["show", "-150000000", "--cycle", "1"]);
    assert_eq!(stdout_of(&output).trim(), "-₿1.5");
}

#[test]
fn test_show_fiat_with_rates() {
    let rates = write_temp_file(r#"[{"code": "USD", "rate": 65000}]"#, ".json");
    let rates_path = rates.path().to_str().unwrap();
    let output = run_cli(&[
        "show",
        "150000000",
        "--unit",
        "fiat",
        "--fiat",
        "USD",
        "--rates",
        rates_path,
    ]);
    assert_eq!(stdout_of(&output).trim(), "$97,500.00");
}

#[test]
fn test_show_json_error_descriptor() {
    let output = run_cli(&[
        "show", "1000", "--unit", "fiat", "--fiat", "USD", "--format", "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["errorMessage"], "rate fetch failed");
}

#[test]
fn test_show_rejects_fractional_sats() {
    let output = run_cli(&["show", "1.5"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fractional satoshis"), "stderr: {}", stderr);
}

#[test]
fn test_rates_lists_one_btc_per_currency() {
    let rates = write_temp_file(
        r#"[{"code": "USD", "rate": 65000}, {"code": "EUR", "rate": 60000}]"#,
        ".json",
    );
    let rates_path = rates.path().to_str().unwrap();
    let output = run_cli(&["rates", "--rates", rates_path, "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["code"], "USD");
    assert_eq!(rows[0]["oneBtc"], "$65,000.00");
    assert_eq!(rows[1]["oneBtc"], "60.000,00 €");
}
