//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "admx-extract",
    version,
    about = "Extract administrative template policy metadata to CSV",
    long_about = "Extract policy metadata from a directory of administrative template\n\
                  definition files (.admx) and their localization files (.adml),\n\
                  resolving string references into one flat CSV record per policy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve every policy in a templates directory into a CSV table.
    Extract(ExtractArgs),

    /// Compare two exported CSV tables by a key column.
    Diff(DiffArgs),

    /// Search a directory of XML reports for a literal string.
    SearchReports(SearchReportsArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Directory containing .admx files and per-language .adml
    /// subdirectories.
    #[arg(value_name = "TEMPLATES_DIR")]
    pub templates_dir: PathBuf,

    /// Language subdirectory to read localization files from.
    #[arg(long = "language", value_name = "ID", default_value = "en-US")]
    pub language: String,

    /// Output CSV path (default: <TEMPLATES_DIR>/policies.csv).
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// First exported table.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second exported table.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Column to join the two tables on.
    #[arg(long = "key", value_name = "COLUMN", default_value = "name")]
    pub key: String,
}

#[derive(Parser)]
pub struct SearchReportsArgs {
    /// Directory containing .xml report files.
    #[arg(value_name = "REPORTS_DIR")]
    pub reports_dir: PathBuf,

    /// Literal string to search for.
    #[arg(value_name = "NEEDLE")]
    pub needle: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
