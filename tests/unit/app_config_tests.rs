/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::{Path, PathBuf};
use udverify::app_config::{Config, LogLevel};
use udverify::errors::AppError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_shouldHaveExpectedValues() {
    let config = Config::default();

    assert_eq!(config.input_dir, PathBuf::from("inputSSF"));
    assert_eq!(config.verified_dir, PathBuf::from("Verified"));
    assert_eq!(config.output_file, PathBuf::from("output.txt"));
    assert_eq!(config.suffixes.len(), 6);
    assert!(config.suffixes.contains(&".mo.pos.chnk".to_string()));
    assert_eq!(config.converter.program, "mvn");
    assert!(config.converter.fail_on_stderr);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that converter placeholders are substituted per file
#[test]
fn test_render_args_shouldSubstitutePlaceholders() {
    let config = Config::default();

    let args = config.converter.render_args(Path::new("in/a.dat"), Path::new("output.txt"));

    assert_eq!(args[0], "exec:java");
    assert_eq!(args[2], "-Dexec.args=in/a.dat output.txt");
}

/// Test that a minimal JSON config falls back to defaults
#[test]
fn test_deserialize_withPartialJson_shouldApplyDefaults() -> Result<()> {
    let json = r#"{ "input_dir": "corpus", "suffixes": [".ssf"], "log_level": "debug" }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.input_dir, PathBuf::from("corpus"));
    assert_eq!(config.suffixes, vec![".ssf".to_string()]);
    assert_eq!(config.verified_dir, PathBuf::from("Verified"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.converter.timeout_secs, None);
    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(created.suffixes, reloaded.suffixes);
    assert_eq!(created.converter.args, reloaded.converter.args);
    Ok(())
}

/// Test that malformed JSON is reported
#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Test validation of the suffix allow-list
#[test]
fn test_validate_withEmptySuffixes_shouldFail() {
    let mut config = Config::default();
    config.suffixes.clear();

    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test validation of converter placeholders
#[test]
fn test_validate_withoutOutputPlaceholder_shouldFail() {
    let mut config = Config::default();
    config.converter.args = vec!["{input}".to_string()];

    assert!(config.validate().is_err());
}

/// Test that the verified store may not live inside the input tree
#[test]
fn test_validate_withVerifiedInsideInput_shouldFail() {
    let mut config = Config::default();
    config.input_dir = PathBuf::from("data");
    config.verified_dir = PathBuf::from("./data/verified");

    assert!(config.validate().is_err());

    config.verified_dir = PathBuf::from("data-verified");
    assert!(config.validate().is_ok());
}

/// Test that nesting is detected when one directory is relative and the other absolute
#[test]
fn test_validate_withMixedRelativeAndAbsoluteDirs_shouldDetectNesting() -> Result<()> {
    let cwd = std::env::current_dir()?;

    let mut config = Config::default();
    config.input_dir = PathBuf::from("data");
    config.verified_dir = cwd.join("data").join("verified");
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    config.input_dir = cwd.join("data");
    config.verified_dir = PathBuf::from("data/../data/verified");
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    config.verified_dir = cwd.join("data-verified");
    assert!(config.validate().is_ok());
    Ok(())
}

/// Test that an empty issues log setting disables the log
#[test]
fn test_issues_log_path_withEmptySetting_shouldBeNone() {
    let mut config = Config::default();
    assert!(config.issues_log_path().is_some());

    config.issues_log = String::new();
    assert!(config.issues_log_path().is_none());
}
