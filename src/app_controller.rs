use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::converter::{Converter, ExternalConverter};
use crate::errors::{ConverterError, CorpusError};
use crate::file_utils::FileManager;
use crate::verification::{self, Mismatch, MismatchReport, Outcome, ReportLabels};

// @module: Batch pipeline driver: convert, verify, relocate

/// Terminal state of one candidate file after a pipeline pass
#[derive(Debug)]
pub enum FileDisposition {
    /// Passed verification and was moved into the verified store
    Verified { destination: PathBuf },
    /// The converter failed; nothing was verified
    ConversionFailed(ConverterError),
    /// The input or the converter output could not be read
    Unreadable(CorpusError),
    /// The conversion did not preserve the token sequence
    Rejected(Mismatch),
    /// Verification passed but the file could not be moved
    MoveFailed(String),
}

impl FileDisposition {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }
}

impl fmt::Display for FileDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verified { destination } => write!(f, "verified, moved to {}", destination.display()),
            Self::ConversionFailed(e) => write!(f, "conversion failed: {}", e),
            Self::Unreadable(e) => write!(f, "unreadable: {}", e),
            Self::Rejected(mismatch) => write!(
                f,
                "verification failed: {}",
                MismatchReport::new(mismatch, &ReportLabels::default())
            ),
            Self::MoveFailed(e) => write!(f, "verified but not moved: {}", e),
        }
    }
}

/// Counts of dispositions over a batch
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub verified: usize,
    pub rejected: usize,
    pub conversion_failed: usize,
    pub unreadable: usize,
    pub move_failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, disposition: &FileDisposition) {
        match disposition {
            FileDisposition::Verified { .. } => self.verified += 1,
            FileDisposition::Rejected(_) => self.rejected += 1,
            FileDisposition::ConversionFailed(_) => self.conversion_failed += 1,
            FileDisposition::Unreadable(_) => self.unreadable += 1,
            FileDisposition::MoveFailed(_) => self.move_failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.verified + self.rejected + self.conversion_failed + self.unreadable + self.move_failed
    }

    pub fn message(&self) -> String {
        format!(
            "{} verified, {} rejected, {} conversion failures, {} unreadable, {} move failures",
            self.verified, self.rejected, self.conversion_failed, self.unreadable, self.move_failed
        )
    }
}

/// Main application controller for the conversion pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Conversion backend
    converter: Box<dyn Converter>,
}

impl Controller {
    // @method: Create a controller running the configured external converter
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let converter = ExternalConverter::new(config.converter.clone());
        Ok(Self::with_converter(config, Box::new(converter)))
    }

    // @method: Create a controller with an explicit conversion backend
    pub fn with_converter(config: Config, converter: Box<dyn Converter>) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Candidate SSF files under the input root, excluding the converter
    /// output file
    pub fn find_candidates(&self) -> Result<Vec<PathBuf>> {
        let files = FileManager::find_files_with_suffixes(&self.config.input_dir, &self.config.suffixes)?;
        Ok(files
            .into_iter()
            .filter(|file| !same_file(file, &self.config.output_file))
            .collect())
    }

    /// Convert, verify and (on success) relocate a single file
    pub async fn process_file(&self, input_file: &Path) -> FileDisposition {
        let output_file = &self.config.output_file;

        // A converter that exits cleanly without writing must not be checked
        // against the previous file's output
        match std::fs::remove_file(output_file) {
            Ok(()) => debug!("Removed previous converter output {:?}", output_file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                error!("Cannot reset converter output {:?}: {}", output_file, e);
                return FileDisposition::ConversionFailed(ConverterError::StaleOutput {
                    path: output_file.clone(),
                    message: e.to_string(),
                });
            }
        }

        debug!("Converting {:?} with {}", input_file, self.converter.name());
        if let Err(e) = self.converter.convert(input_file, output_file).await {
            error!("Conversion failed for {:?}: {}", input_file, e);
            return FileDisposition::ConversionFailed(e);
        }

        let outcome = match verification::verify_files(input_file, output_file) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{}", e);
                return FileDisposition::Unreadable(e);
            }
        };

        if let Outcome::Misaligned(mismatch) = outcome {
            warn!(
                "Verification failed for {:?}\n{}",
                input_file,
                MismatchReport::new(&mismatch, &ReportLabels::default())
            );
            return FileDisposition::Rejected(mismatch);
        }

        match FileManager::move_preserving_structure(input_file, &self.config.input_dir, &self.config.verified_dir) {
            Ok(destination) => {
                info!("Verified and moved: {:?} -> {:?}", input_file, destination);
                FileDisposition::Verified { destination }
            }
            Err(e) => {
                error!("Failed to move verified file {:?}: {:#}", input_file, e);
                FileDisposition::MoveFailed(format!("{:#}", e))
            }
        }
    }

    /// Run the pipeline over every candidate under the input root
    pub async fn run(&self) -> Result<RunSummary> {
        let start_time = std::time::Instant::now();
        let input_dir = &self.config.input_dir;

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let candidates = self.find_candidates()?;
        info!("Found {} SSF files to process in {:?}", candidates.len(), input_dir);

        let mut summary = RunSummary::default();
        if candidates.is_empty() {
            return Ok(summary);
        }

        let progress = ProgressBar::new(candidates.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress.set_style(style.progress_chars("=> "));

        let mut issues = Vec::new();
        for candidate in &candidates {
            let file_name = candidate
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress.set_message(format!("Processing: {}", file_name));

            let disposition = self.process_file(candidate).await;
            summary.record(&disposition);
            if !disposition.is_verified() {
                issues.push(format!("{}: {}", candidate.display(), disposition));
            }

            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Processing completed in {:.1}s: {}",
            start_time.elapsed().as_secs_f64(),
            summary.message()
        );

        if let Some(log_path) = self.config.issues_log_path() {
            issues.push(format!("Run over {}: {}", input_dir.display(), summary.message()));
            for line in &issues {
                if let Err(e) = FileManager::append_to_log_file(&log_path, line) {
                    warn!("Failed to write issues log {:?}: {}", log_path, e);
                    break;
                }
            }
        }

        Ok(summary)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
