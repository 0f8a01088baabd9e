//! Integration tests for the temprelay CLI

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run_temprelay(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--"])
        .args(args)
        // Make sure an API key from the environment cannot leak into tests
        // that rely on no query being possible.
        .env_remove("TEMPRELAY_WEATHER__API_KEY")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = run_temprelay(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("temprelay"));
    assert!(stdout.contains("Zip code to return weather data for"));
    assert!(stdout.contains("celsius"));
}

/// A non-numeric zip code is rejected with the validation message, before
/// any query or serial write, and the process still exits 0
#[test]
fn test_invalid_zip_letters() {
    let output = run_temprelay(&["-z", "abcde"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter a valid zip code"));
    assert!(!stdout.contains("Temperature:"));
}

/// A four-digit zip code fails the length check the same way
#[test]
fn test_invalid_zip_too_short() {
    let output = run_temprelay(&["-z", "1234"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter a valid zip code"));
}

/// With a valid zip code but no API key configured, the run stops with a
/// configuration message instead of contacting the weather service
#[test]
fn test_valid_zip_without_api_key() {
    let output = run_temprelay(&["-z", "94305"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration error"));
    assert!(!stdout.contains("Temperature:"));
}

fn write_broken_config(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "temprelay-broken-{tag}-{}.toml",
        std::process::id()
    ));
    fs::write(&path, "this is not [valid toml").expect("Failed to write config file");
    path
}

/// An invalid zip code is rejected before the config file is even read,
/// so a broken config cannot change the message
#[test]
fn test_invalid_zip_wins_over_broken_config() {
    let config_path = write_broken_config("zip");
    let output = run_temprelay(&[
        "-z",
        "abcde",
        "--config",
        config_path.to_str().expect("temp path should be UTF-8"),
    ]);
    fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter a valid zip code"));
    assert!(!stdout.contains("Configuration error"));
}

/// With a valid zip code, an unparseable config file still resolves to the
/// configuration message and exit status 0
#[test]
fn test_broken_config_reports_configuration_message() {
    let config_path = write_broken_config("load");
    let output = run_temprelay(&[
        "-z",
        "94305",
        "--config",
        config_path.to_str().expect("temp path should be UTF-8"),
    ]);
    fs::remove_file(&config_path).ok();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration error. Please check your config file and API key."));
}

/// A query failure against an unreachable weather service collapses to the
/// generic Open Weather Map line, still with exit status 0
#[test]
fn test_unreachable_weather_service_prints_generic_message() {
    let output = Command::new("cargo")
        .args(["run", "--", "-z", "94305"])
        .env("TEMPRELAY_WEATHER__API_KEY", "test_api_key")
        // Port 1 is never serving HTTP; the connection is refused at once
        .env("TEMPRELAY_WEATHER__BASE_URL", "http://127.0.0.1:1")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "Open Weather Map was unable to identify the given zip code. \
         Please enter a valid zip code."
    ));
    assert!(!stdout.contains("Temperature:"));
}
