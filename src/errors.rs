/*!
 * Error types for the udverify application.
 *
 * This module contains custom error types for the different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 *
 * Content disagreement between two corpus files is not an error: it is a
 * normal verification outcome (see `verification::Outcome`).
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting sentences from a corpus file
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The file is missing, unreadable or not valid UTF-8
    #[error("Failed to read corpus file {path:?}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    /// Path of the file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } => path,
        }
    }
}

/// Errors reported by the external converter collaborator
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The converter process could not be started
    #[error("Failed to launch converter '{program}': {message}")]
    Launch {
        /// Program that was invoked
        program: String,
        /// Reason reported by the operating system
        message: String,
    },

    /// The converter exited with a non-zero status
    #[error("Converter exited with status {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    ExitStatus {
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The converter succeeded but wrote to standard error
    #[error("Converter reported errors: {0}")]
    Stderr(String),

    /// The converter did not finish within the configured time
    #[error("Converter timed out after {0} seconds")]
    Timeout(u64),

    /// Output left by an earlier conversion could not be removed
    #[error("Failed to remove previous converter output {path:?}: {message}")]
    StaleOutput {
        /// Converter output path
        path: PathBuf,
        /// Reason reported by the operating system
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from corpus extraction
    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// Error from the converter
    #[error("Converter error: {0}")]
    Converter(#[from] ConverterError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
