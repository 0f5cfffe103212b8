//! CLI argument definitions for the PSF loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "psf",
    version,
    about = "Provider Specific File loader - validate and load PSF extracts",
    long_about = "Validate provider-reimbursement extracts against the PSF data-quality \
                  rule set and load them into a SQLite store with a full DQ audit trail.\n\n\
                  All rows are loaded regardless of issues found; findings land in the \
                  dq_issues table and each run is tracked in etl_log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full ETL: validate, load all rows, record issues and run log.
    Run(RunArgs),

    /// Validate only: report issues without touching a database.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the PSF extract (comma-delimited, with a header row).
    #[arg(value_name = "CSV_FILE")]
    pub csv: PathBuf,

    /// SQLite database file (created if absent).
    #[arg(long = "database", value_name = "PATH")]
    pub database: PathBuf,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the PSF extract (comma-delimited, with a header row).
    #[arg(value_name = "CSV_FILE")]
    pub csv: PathBuf,

    /// Write the full issue list as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}
