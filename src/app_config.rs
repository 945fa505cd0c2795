use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use crate::errors::AppError;

/// Placeholder replaced by the input file path in converter arguments
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Placeholder replaced by the output file path in converter arguments
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root directory scanned for SSF files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Root directory receiving files that passed verification
    #[serde(default = "default_verified_dir")]
    pub verified_dir: PathBuf,

    /// Path the converter writes its CoNLL-U output to
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// File name suffixes that mark a file as an SSF candidate
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,

    /// External converter settings
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Issues log path; empty disables the log
    #[serde(default = "default_issues_log")]
    pub issues_log: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// External converter command
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConverterConfig {
    // @field: Executable name or path
    #[serde(default = "default_converter_program")]
    pub program: String,

    // @field: Arguments; {input} and {output} are substituted per file
    #[serde(default = "default_converter_args")]
    pub args: Vec<String>,

    // @field: Treat any stderr output as a failed conversion
    #[serde(default = "default_true")]
    pub fail_on_stderr: bool,

    // @field: Kill the converter after this many seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ConverterConfig {
    /// Arguments with the placeholders replaced for one file
    pub fn render_args(&self, input: &Path, output: &Path) -> Vec<String> {
        let input = input.to_string_lossy();
        let output = output.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(INPUT_PLACEHOLDER, &input)
                    .replace(OUTPUT_PLACEHOLDER, &output)
            })
            .collect()
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: default_converter_program(),
            args: default_converter_args(),
            fail_on_stderr: true,
            timeout_secs: None,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("inputSSF")
}

fn default_verified_dir() -> PathBuf {
    PathBuf::from("Verified")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_suffixes() -> Vec<String> {
    ["-posn-name", ".pos.cnhk", ".dat", ".txt", ".mo.po", ".mo.pos.chnk"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_issues_log() -> String {
    "udverify.issues.log".to_string()
}

fn default_converter_program() -> String {
    "mvn".to_string()
}

fn default_converter_args() -> Vec<String> {
    vec![
        "exec:java".to_string(),
        "-Dexec.mainClass=in.ud.convert.SSFtoCoNLLUConverter".to_string(),
        format!("-Dexec.args={} {}", INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER),
    ]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration at `path`, writing a default one first if it
    /// does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.suffixes.is_empty() || self.suffixes.iter().any(|s| s.is_empty()) {
            return Err(AppError::Config(
                "At least one non-empty file suffix is required".to_string(),
            ));
        }

        if self.converter.program.trim().is_empty() {
            return Err(AppError::Config("Converter program is not set".to_string()));
        }

        for placeholder in [INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER] {
            if !self.converter.args.iter().any(|arg| arg.contains(placeholder)) {
                return Err(AppError::Config(format!(
                    "Converter arguments must contain the {} placeholder",
                    placeholder
                )));
            }
        }

        let input = resolve(&self.input_dir)?;
        let verified = resolve(&self.verified_dir)?;
        if verified.starts_with(&input) {
            return Err(AppError::Config(format!(
                "Verified directory {:?} must not be inside the input directory {:?}",
                self.verified_dir, self.input_dir
            )));
        }

        Ok(())
    }

    /// Issues log location, if enabled
    pub fn issues_log_path(&self) -> Option<PathBuf> {
        if self.issues_log.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.issues_log))
        }
    }
}

// Absolute form against the current directory, then normalised
fn resolve(path: &Path) -> Result<PathBuf, AppError> {
    let absolute = std::path::absolute(path)
        .map_err(|e| AppError::Config(format!("Cannot resolve directory {:?}: {}", path, e)))?;
    Ok(normalize(&absolute))
}

// Lexical normalisation: drops `.` and resolves `..` without touching the disk
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            verified_dir: default_verified_dir(),
            output_file: default_output_file(),
            suffixes: default_suffixes(),
            converter: ConverterConfig::default(),
            issues_log: default_issues_log(),
            log_level: LogLevel::default(),
        }
    }
}
