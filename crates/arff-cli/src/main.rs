//! Min-max normalizer CLI.

use arff_cli::logging::{LogConfig, LogFormat, init_logging};
use arff_cli::ranges::parse_range_args;
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::commands::run;
use crate::summary::print_summary;

/// Exit status for malformed command lines.
const USAGE_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let range_args = match parse_range_args(cli.ranges.as_slice()) {
        Ok(range_args) => range_args,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("usage: minmax-normalize <INPUT> -c <CLASS> [-<ATTR> <NEW_MIN> <NEW_MAX>]...");
            std::process::exit(USAGE_EXIT_CODE);
        }
    };
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli, range_args) {
        Ok(outcome) => {
            print_summary(&outcome, cli.summary);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config = config
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
