// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use udverify::app_config::{self, Config};
use udverify::app_controller::Controller;
use udverify::verification::{self, Report, ReportLabels};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert and verify every SSF file under the input directory (default command)
    Run(RunArgs),

    /// Check that a CoNLL-U file carries the same tokens as an SSF file
    Verify(VerifyArgs),

    /// Generate shell completions for udverify
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Directory scanned for SSF files (overrides the config)
    #[arg(value_name = "INPUT_DIR")]
    input_dir: Option<PathBuf>,

    /// Directory receiving verified files (overrides the config)
    #[arg(long)]
    verified_dir: Option<PathBuf>,

    /// Path the converter writes to (overrides the config)
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(clap::Args, Debug)]
struct VerifyArgs {
    /// Source file in SSF
    #[arg(value_name = "SSF")]
    ssf_file: PathBuf,

    /// Converted file in CoNLL-U
    #[arg(value_name = "CONLLU")]
    conllu_file: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// udverify - SSF to CoNLL-U conversion verifier
#[derive(Parser, Debug)]
#[command(name = "udverify")]
#[command(version)]
#[command(about = "Verify SSF to CoNLL-U conversions token by token")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "udverify runs an external SSF to CoNLL-U converter over a directory tree and
moves every input whose conversion preserved all sentences and tokens into a
verified directory. Files that fail are left in place.

EXAMPLES:
    udverify                                   # Run the pipeline using conf.json
    udverify inputSSF/ --verified-dir Verified # Override directories
    udverify verify story.dat output.conllu    # Check a single pair
    udverify completions bash > udverify.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The max level is lowered or raised once options are known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "udverify", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Verify(args)) => run_verify(args),
        Some(Commands::Run(args)) => run_pipeline(args).await,
        None => run_pipeline(cli.run).await,
    }
}

fn apply_log_level(level: &app_config::LogLevel) {
    log::set_max_level(level.to_level_filter());
}

async fn run_pipeline(options: RunArgs) -> Result<()> {
    if let Some(level) = &options.log_level {
        apply_log_level(&level.clone().into());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(input_dir) = options.input_dir {
        config.input_dir = input_dir;
    }
    if let Some(verified_dir) = options.verified_dir {
        config.verified_dir = verified_dir;
    }
    if let Some(output_file) = options.output_file {
        config.output_file = output_file;
    }
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }

    apply_log_level(&config.log_level);

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;
    let summary = controller.run().await?;

    if summary.total() > 0 && summary.verified < summary.total() {
        info!("{} of {} files were left in place", summary.total() - summary.verified, summary.total());
    }

    Ok(())
}

fn run_verify(options: VerifyArgs) -> Result<()> {
    if let Some(level) = options.log_level {
        apply_log_level(&level.into());
    }

    let outcome = verification::verify_files(&options.ssf_file, &options.conllu_file)?;
    let labels = ReportLabels::default();
    println!("{}", Report::new(&outcome, &labels));

    if !outcome.is_aligned() {
        error!("Verification failed for {:?}", options.ssf_file);
        std::process::exit(1);
    }

    Ok(())
}
