use anyhow::Result;
use arff_cli::pipeline::{NormalizeOutcome, NormalizeRequest, run_normalize};
use arff_cli::ranges::RangeArgs;
use arff_ingest::ReadOptions;
use arff_model::Limits;
use tracing::debug;

use crate::cli::Cli;

pub fn run(cli: &Cli, range_args: RangeArgs) -> Result<NormalizeOutcome> {
    let limits = Limits::default()
        .with_max_rows(cli.max_rows)
        .with_max_columns(cli.max_columns);
    let RangeArgs {
        class_attribute,
        ranges,
    } = range_args;
    debug!(
        class = %class_attribute,
        ranges = ranges.len(),
        max_rows = limits.max_rows,
        max_columns = limits.max_columns,
        "normalize request"
    );
    let request = NormalizeRequest {
        input: cli.input.clone(),
        output_dir: cli.output_dir.clone(),
        class_attribute,
        ranges,
        read_options: ReadOptions::with_limits(limits),
    };
    run_normalize(&request)
}
