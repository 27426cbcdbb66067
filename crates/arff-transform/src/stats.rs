//! Per-column minimum and maximum.

use arff_model::{ColumnRange, Dataset, MinMaxTable};

use crate::error::{Result, TransformError};

fn check_column(dataset: &Dataset, column: usize) -> Result<()> {
    if dataset.is_empty() {
        return Err(TransformError::EmptyDataset);
    }
    if column >= dataset.column_count() {
        return Err(TransformError::UnknownColumn {
            column,
            columns: dataset.column_count(),
        });
    }
    Ok(())
}

/// Smallest value in `column`.
pub fn column_min(dataset: &Dataset, column: usize) -> Result<f64> {
    check_column(dataset, column)?;
    Ok(dataset.column(column).fold(f64::INFINITY, f64::min))
}

/// Largest value in `column`.
pub fn column_max(dataset: &Dataset, column: usize) -> Result<f64> {
    check_column(dataset, column)?;
    Ok(dataset.column(column).fold(f64::NEG_INFINITY, f64::max))
}

/// Min/max of every column, class attribute included.
///
/// # Errors
///
/// Returns [`TransformError::EmptyDataset`] when the dataset has no rows.
pub fn compute_min_max(dataset: &Dataset) -> Result<MinMaxTable> {
    if dataset.is_empty() {
        return Err(TransformError::EmptyDataset);
    }
    let columns = (0..dataset.column_count())
        .map(|column| {
            Ok(ColumnRange::new(
                column_min(dataset, column)?,
                column_max(dataset, column)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(MinMaxTable::new(columns))
}
