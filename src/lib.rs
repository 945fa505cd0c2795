/*!
 * # udverify - SSF to CoNLL-U conversion verifier
 *
 * A Rust library that checks a linguistic-annotation conversion from SSF
 * (Shakti Standard Format) to CoNLL-U preserved the exact token sequence,
 * sentence by sentence, and drives a batch pipeline that only accepts a
 * converted file once that check passes.
 *
 * ## Features
 *
 * - Extract sentence/token sequences from SSF and CoNLL-U files
 * - Positional sentence-by-sentence alignment with a first-mismatch report
 * - Batch pipeline: discover SSF files by suffix, run an external converter,
 *   verify, and move accepted files into a verified store
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `corpus`: Format extraction (`corpus::ssf`, `corpus::conllu`)
 * - `verification`: Alignment decision and reporting
 * - `converter`: External converter invocation behind a trait
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Batch pipeline controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod corpus;
pub mod verification;
pub mod converter;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use corpus::{extract, CorpusFormat, Document, Sentence};
pub use verification::{verify, verify_files, Mismatch, Outcome};
pub use errors::{AppError, ConverterError, CorpusError};
