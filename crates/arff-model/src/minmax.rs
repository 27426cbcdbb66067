//! Per-column observed extrema.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::limits::Limits;
use crate::schema::Schema;

/// Observed minimum and maximum of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnRange {
    pub min: f64,
    pub max: f64,
}

impl ColumnRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when every value in the column is identical.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Two-row table: row 0 holds each column's minimum, row 1 its maximum.
///
/// Column `i` belongs to schema attribute `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinMaxTable {
    columns: Vec<ColumnRange>,
}

impl MinMaxTable {
    pub fn new(columns: Vec<ColumnRange>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<ColumnRange> {
        self.columns.get(column).copied()
    }

    pub fn min(&self, column: usize) -> Option<f64> {
        self.get(column).map(|range| range.min)
    }

    pub fn max(&self, column: usize) -> Option<f64> {
        self.get(column).map(|range| range.max)
    }

    pub fn columns(&self) -> &[ColumnRange] {
        &self.columns
    }

    /// Lays the table out as a two-row dataset so it can be written with the
    /// same serializer as regular data.
    pub fn to_dataset(&self, relation: Option<String>, schema: &Schema) -> Result<Dataset> {
        let minimums = self.columns.iter().map(|range| range.min).collect();
        let maximums = self.columns.iter().map(|range| range.max).collect();
        let limits = Limits {
            max_rows: 2,
            max_columns: schema.len(),
        };
        Dataset::from_rows(relation, schema.clone(), vec![minimums, maximums], limits)
    }
}
