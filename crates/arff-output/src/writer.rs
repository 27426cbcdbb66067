//! Serializes a dataset back into the attribute-declaration text format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use arff_model::Dataset;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::naming::relation_name;

/// Fixed six-digit fractional formatting used for every value.
pub fn format_value(value: f64) -> String {
    format!("{value:.6}")
}

/// Writes `dataset` under the given relation name.
///
/// Layout: `@relation`, a blank line, one `@attribute` line per schema
/// attribute, `@data`, then one space-separated line per row.
pub fn render_dataset<W: Write>(out: &mut W, relation: &str, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "@relation {relation}")?;
    writeln!(out)?;
    for attribute in dataset.schema().attributes() {
        writeln!(
            out,
            "@attribute {} {}",
            attribute.name, attribute.declared_type
        )?;
    }
    writeln!(out, "@data")?;
    for row in dataset.rows() {
        let line = row
            .iter()
            .map(|value| format_value(*value))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes `dataset` to it.
///
/// The relation name is derived from the destination file name.
///
/// # Errors
///
/// Returns [`OutputError::FileWrite`] if the file cannot be created or a write
/// fails. A failure part-way through may leave a truncated file.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let to_error = |source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    render_dataset(&mut writer, &relation_name(path), dataset).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "dataset written"
    );
    Ok(())
}
