//! Numeric table plus the schema that gives its columns meaning.

use crate::error::{Capacity, ModelError, Result};
use crate::limits::Limits;
use crate::schema::Schema;

/// Rows of `f64` values, one value per schema attribute.
///
/// Rows keep their insertion order. Capacity is checked on every append, so a
/// dataset never holds more than `limits.max_rows` rows or
/// `limits.max_columns` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    relation: Option<String>,
    schema: Schema,
    rows: Vec<Vec<f64>>,
    limits: Limits,
}

impl Dataset {
    /// Creates an empty dataset for `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CapacityExceeded`] when the schema has more
    /// attributes than `limits.max_columns`.
    pub fn new(relation: Option<String>, schema: Schema, limits: Limits) -> Result<Self> {
        if schema.len() > limits.max_columns {
            return Err(ModelError::CapacityExceeded {
                capacity: Capacity::Columns,
                limit: limits.max_columns,
            });
        }
        Ok(Self {
            relation,
            schema,
            rows: Vec::new(),
            limits,
        })
    }

    /// Creates a dataset and appends `rows` in order.
    pub fn from_rows(
        relation: Option<String>,
        schema: Schema,
        rows: Vec<Vec<f64>>,
        limits: Limits,
    ) -> Result<Self> {
        let mut dataset = Self::new(relation, schema, limits)?;
        dataset.rows.reserve(rows.len().min(limits.max_rows));
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Appends a row at the end of the table.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::RowWidth`] if the row does not have one value
    /// per attribute, or [`ModelError::CapacityExceeded`] once the table is full.
    pub fn push_row(&mut self, row: Vec<f64>) -> Result<()> {
        if row.len() != self.schema.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.schema.len(),
                found: row.len(),
            });
        }
        if self.rows.len() >= self.limits.max_rows {
            return Err(ModelError::CapacityExceeded {
                capacity: Capacity::Rows,
                limit: self.limits.max_rows,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, top to bottom. Empty if `column` is out of range.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.get(column).copied())
    }
}
