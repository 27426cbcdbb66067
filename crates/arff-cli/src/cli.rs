//! CLI argument definitions for the min-max normalizer.

use std::path::PathBuf;

use arff_model::{DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "minmax-normalize",
    version,
    about = "Min-max normalize selected attributes of a dataset file",
    long_about = "Read a dataset file (@attribute declarations followed by @data rows), \
                  compute per-attribute min/max, and rescale selected attributes into new ranges.\n\n\
                  Writes MinMax<INPUT> (per-attribute min/max) and MinMaxNormalize<INPUT> \
                  (normalized data). The class attribute is never rescaled.",
    after_help = "Options go before INPUT; everything after INPUT is read as RANGES.\n\n\
                  Example:\n  minmax-normalize --summary none mmtest.arff -c class -a1 0 1 -a2 10 20"
)]
pub struct Cli {
    /// Dataset file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// `-c <CLASS>` followed by any number of `-<ATTR> <NEW_MIN> <NEW_MAX>` triples.
    #[arg(
        value_name = "RANGES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub ranges: Vec<String>,

    /// Directory for the output files (default: next to INPUT).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of data rows accepted.
    #[arg(long = "max-rows", value_name = "N", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Maximum number of attributes accepted.
    #[arg(long = "max-columns", value_name = "N", default_value_t = DEFAULT_MAX_COLUMNS)]
    pub max_columns: usize,

    /// How to print the run summary on stdout (`none` keeps only the output paths).
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Run summary choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
    None,
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
