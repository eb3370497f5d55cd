//! CLI argument definitions for the data-quality pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "odq",
    version,
    about = "Olympics data-quality pipeline - classify and reconcile medal data",
    long_about = "Classify the countries reference table and the summer results table\n\
                  into clean and quarantine partitions, and cross-check code integrity\n\
                  between them. Legacy delegation codes are harmonized through an\n\
                  explicit code map before any referential check."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Split both tables into clean and quarantine partitions.
    Split(SplitArgs),

    /// Run the coarse cross-table code integrity audit.
    Audit(AuditArgs),

    /// Run the audit, then the split, in one invocation.
    Pipeline(PipelineArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the summer results CSV.
    #[arg(long = "summer", value_name = "CSV")]
    pub summer: PathBuf,

    /// Path to the countries reference CSV.
    #[arg(long = "countries", value_name = "CSV")]
    pub countries: PathBuf,

    /// Path to the code map CSV (from_code,to_code).
    #[arg(long = "code-map", value_name = "CSV")]
    pub code_map: PathBuf,

    /// Output directory for generated files.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "data/processed")]
    pub out_dir: PathBuf,
}

#[derive(Parser)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Upper bound of the valid year range (default: current year).
    #[arg(long = "max-year", value_name = "YEAR")]
    pub max_year: Option<i32>,
}

#[derive(Parser)]
pub struct AuditArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Treat null fact codes as a failure.
    #[arg(long = "fail-on-null-codes")]
    pub fail_on_null_codes: bool,

    /// Historical codes exempted from the strict check (repeatable).
    #[arg(long = "allow", value_name = "CODE", default_values = ["BOH"])]
    pub allow: Vec<String>,
}

#[derive(Parser)]
pub struct PipelineArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Upper bound of the valid year range (default: current year).
    #[arg(long = "max-year", value_name = "YEAR")]
    pub max_year: Option<i32>,

    /// Treat null fact codes as a failure.
    #[arg(long = "fail-on-null-codes")]
    pub fail_on_null_codes: bool,

    /// Historical codes exempted from the strict check (repeatable).
    #[arg(long = "allow", value_name = "CODE", default_values = ["BOH"])]
    pub allow: Vec<String>,
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
