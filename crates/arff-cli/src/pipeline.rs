//! Read → statistics → min/max output → normalize → normalized output.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use arff_ingest::{ReadOptions, read_dataset_file};
use arff_model::{Dataset, MinMaxTable, RangeSpec};
use arff_output::{OutputPaths, write_dataset};
use arff_transform::{NormalizationPlan, compute_min_max};
use serde::Serialize;
use tracing::{info, info_span};

/// Everything needed for one normalization run.
#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub class_attribute: String,
    pub ranges: Vec<RangeSpec>,
    pub read_options: ReadOptions,
}

/// How an attribute was treated by the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeRole {
    Class,
    Normalized,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSummary {
    pub name: String,
    pub declared_type: String,
    pub min: f64,
    pub max: f64,
    pub role: AttributeRole,
    pub target: Option<TargetRange>,
}

/// Result of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeOutcome {
    pub input: PathBuf,
    pub relation: Option<String>,
    pub rows: usize,
    pub class_attribute: String,
    pub attributes: Vec<AttributeSummary>,
    pub minmax_path: PathBuf,
    pub normalized_path: PathBuf,
}

impl NormalizeOutcome {
    pub fn normalized_count(&self) -> usize {
        self.attributes
            .iter()
            .filter(|attribute| attribute.role == AttributeRole::Normalized)
            .count()
    }
}

/// Runs the whole pipeline.
///
/// Every check that can reject the request (argument shape aside) runs
/// before the first output file is created, so a failed run leaves no output.
pub fn run_normalize(request: &NormalizeRequest) -> Result<NormalizeOutcome> {
    let run_span = info_span!("run", input = %request.input.display());
    let _run_guard = run_span.enter();
    let paths = OutputPaths::for_input(&request.input, request.output_dir.as_deref())
        .context("derive output file names")?;

    // =========================================================================
    // Stage 1: Read schema and rows
    // =========================================================================
    let read_start = Instant::now();
    let dataset = info_span!("read")
        .in_scope(|| read_dataset_file(&request.input, &request.read_options))
        .with_context(|| format!("read {}", request.input.display()))?;
    info!(
        rows = dataset.row_count(),
        attributes = dataset.column_count(),
        duration_ms = read_start.elapsed().as_millis(),
        "read complete"
    );

    // =========================================================================
    // Stage 2: Statistics and range validation
    // =========================================================================
    let stats_start = Instant::now();
    let stats = info_span!("statistics")
        .in_scope(|| compute_min_max(&dataset))
        .context("compute min/max")?;
    let plan = NormalizationPlan::new(
        dataset.schema(),
        &stats,
        &request.class_attribute,
        &request.ranges,
    )
    .context("validate target ranges")?;
    info!(
        attributes = stats.len(),
        selected = plan.columns().len(),
        duration_ms = stats_start.elapsed().as_millis(),
        "statistics complete"
    );

    // =========================================================================
    // Stage 3: Min/max output
    // =========================================================================
    if let Some(dir) = &request.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
    }
    let minmax = stats.to_dataset(dataset.relation().map(str::to_string), dataset.schema())?;
    info_span!("write", kind = "minmax")
        .in_scope(|| write_dataset(&paths.minmax, &minmax))
        .context("write min/max file")?;
    info!(path = %paths.minmax.display(), "min/max values written");

    // =========================================================================
    // Stage 4: Normalize and write
    // =========================================================================
    let normalize_start = Instant::now();
    let normalized = info_span!("normalize")
        .in_scope(|| plan.apply(&dataset))
        .context("normalize dataset")?;
    info_span!("write", kind = "normalized")
        .in_scope(|| write_dataset(&paths.normalized, &normalized))
        .context("write normalized file")?;
    info!(
        path = %paths.normalized.display(),
        columns = plan.columns().len(),
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalized data written"
    );

    Ok(NormalizeOutcome {
        input: request.input.clone(),
        relation: dataset.relation().map(str::to_string),
        rows: dataset.row_count(),
        class_attribute: request.class_attribute.clone(),
        attributes: summarize_attributes(&dataset, &stats, &plan),
        minmax_path: paths.minmax,
        normalized_path: paths.normalized,
    })
}

fn summarize_attributes(
    dataset: &Dataset,
    stats: &MinMaxTable,
    plan: &NormalizationPlan,
) -> Vec<AttributeSummary> {
    dataset
        .schema()
        .attributes()
        .iter()
        .zip(stats.columns())
        .enumerate()
        .map(|(column, (attribute, range))| {
            let rescale = plan.rescale_for(column);
            let role = if column == plan.class_column() {
                AttributeRole::Class
            } else if rescale.is_some() {
                AttributeRole::Normalized
            } else {
                AttributeRole::Unchanged
            };
            AttributeSummary {
                name: attribute.name.clone(),
                declared_type: attribute.declared_type.clone(),
                min: range.min,
                max: range.max,
                role,
                target: rescale.map(|rescale| {
                    let (min, max) = rescale.target();
                    TargetRange { min, max }
                }),
            }
        })
        .collect()
}
