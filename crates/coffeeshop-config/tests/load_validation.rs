// crates/coffeeshop-config/tests/load_validation.rs
// ============================================================================
// Module: Load Validation Tests
// Description: Integration tests for config loading guard rails.
// Purpose: Exercise path, size, encoding, and validation failures end to end.
// Dependencies: coffeeshop-config, tempfile
// ============================================================================

//! Config load validation tests for coffeeshop-config.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test fixtures use explicit asserts and unwraps for clarity."
)]

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use coffeeshop_config::ConfigError;
use coffeeshop_config::EnvironmentConfig;
use coffeeshop_config::config_toml_example;

type TestResult = Result<(), String>;

/// Asserts that loading `path` fails with an invalid-config message
/// containing `needle`.
fn assert_invalid(path: &Path, needle: &str) -> TestResult {
    match EnvironmentConfig::load(Some(path)) {
        Ok(_) => Err(format!("expected load failure containing {needle:?}")),
        Err(err) => {
            let message = err.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("expected {needle:?} in error, got: {message}"))
            }
        }
    }
}

#[test]
fn load_rejects_path_exceeding_max_length() -> TestResult {
    let path = PathBuf::from(format!("/tmp/{}", "a/".repeat(2100)));
    assert_invalid(&path, "config path exceeds max length")
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let path = PathBuf::from(format!("/tmp/{}/coffeeshop.toml", "a".repeat(300)));
    assert_invalid(&path, "config path component too long")
}

#[test]
fn load_reports_missing_file_as_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("missing.toml");
    match EnvironmentConfig::load(Some(&path)) {
        Err(ConfigError::Io(_)) => Ok(()),
        other => Err(format!("expected io error, got: {other:?}")),
    }
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("big.toml");
    let mut contents = String::from("# padding\n");
    contents.push_str(&"#".repeat(64 * 1024));
    fs::write(&path, contents).map_err(|err| err.to_string())?;
    assert_invalid(&path, "config file exceeds size limit")
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("binary.toml");
    fs::write(&path, [0xFF, 0xFE, 0x00, 0x01]).map_err(|err| err.to_string())?;
    assert_invalid(&path, "config file must be utf-8")
}

#[test]
fn load_rejects_invalid_toml() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "production = ").map_err(|err| err.to_string())?;
    match EnvironmentConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        other => Err(format!("expected parse error, got: {other:?}")),
    }
}

#[test]
fn load_rejects_unknown_field() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("unknown.toml");
    fs::write(&path, "api_server = \"http://127.0.0.1:5000\"\n").map_err(|err| err.to_string())?;
    match EnvironmentConfig::load(Some(&path)) {
        Err(ConfigError::Parse(message)) if message.contains("unknown field") => Ok(()),
        other => Err(format!("expected unknown-field parse error, got: {other:?}")),
    }
}

#[test]
fn load_empty_file_yields_defaults_with_source_metadata() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").map_err(|err| err.to_string())?;
    let config = EnvironmentConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.api_server_url != "http://127.0.0.1:5000" {
        return Err(format!("unexpected api_server_url: {}", config.api_server_url));
    }
    if config.production {
        return Err("empty config should not be production".to_string());
    }
    if config.source_modified_at.is_none() {
        return Err("source_modified_at should be captured for a real file".to_string());
    }
    Ok(())
}

#[test]
fn load_canonical_example_from_disk() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("coffeeshop.toml");
    fs::write(&path, config_toml_example()).map_err(|err| err.to_string())?;
    let config = EnvironmentConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.auth0.url != "hadi-alnehlawi.eu.auth0.com" {
        return Err(format!("unexpected auth0.url: {}", config.auth0.url));
    }
    Ok(())
}

#[test]
fn load_rejects_invalid_auth0_url() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("bad-auth0.toml");
    fs::write(&path, "[auth0]\nurl = \"https://tenant.auth0.com\"\n")
        .map_err(|err| err.to_string())?;
    assert_invalid(&path, "auth0.url")
}

#[test]
fn load_rejects_production_http_api_server() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("prod-http.toml");
    fs::write(&path, "production = true\n").map_err(|err| err.to_string())?;
    assert_invalid(&path, "api_server_url requires https://")
}

#[test]
fn load_accepts_production_with_insecure_opt_in() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("prod-opt-in.toml");
    fs::write(&path, "production = true\nallow_insecure_http = true\n")
        .map_err(|err| err.to_string())?;
    let config = EnvironmentConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if !config.is_production() {
        return Err("config should report production".to_string());
    }
    Ok(())
}
