//! Min-max normalization of selected columns.
//!
//! A [`NormalizationPlan`] resolves every [`RangeSpec`] against the schema and
//! the observed extrema before any value is touched, so an invalid request
//! fails without producing output. Applying the plan builds a new dataset;
//! columns without a target range, the class attribute among them, are
//! copied unchanged.

use std::collections::BTreeSet;

use arff_model::{ColumnRange, Dataset, MinMaxTable, RangeSpec, Schema};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Linear map from an observed `[old_min, old_max]` onto `[new_min, new_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRescale {
    old_min: f64,
    old_max: f64,
    new_min: f64,
    new_max: f64,
}

impl LinearRescale {
    /// Returns `None` when the observed range is degenerate (`min == max`).
    pub fn new(observed: ColumnRange, new_min: f64, new_max: f64) -> Option<Self> {
        if observed.is_degenerate() {
            return None;
        }
        Some(Self {
            old_min: observed.min,
            old_max: observed.max,
            new_min,
            new_max,
        })
    }

    pub fn target(&self) -> (f64, f64) {
        (self.new_min, self.new_max)
    }

    /// `(value - old_min) * (new_max - new_min) / (old_max - old_min) + new_min`.
    ///
    /// The observed endpoints map exactly onto the target endpoints. Spans
    /// wider than `f64::MAX` are taken at half scale, so every value inside
    /// the observed range maps to a finite value inside the target range.
    pub fn apply(&self, value: f64) -> f64 {
        if value == self.old_max {
            return self.new_max;
        }
        let position = self.position(value);
        let target_span = self.new_max - self.new_min;
        if target_span.is_finite() {
            return self.new_min + position * target_span;
        }
        let half_span = self.new_max * 0.5 - self.new_min * 0.5;
        self.new_min + position * half_span + position * half_span
    }

    /// Where `value` sits in the observed range, `0.0` at `old_min` and `1.0` at `old_max`.
    fn position(&self, value: f64) -> f64 {
        let observed_span = self.old_max - self.old_min;
        if observed_span.is_finite() {
            (value - self.old_min) / observed_span
        } else {
            (value * 0.5 - self.old_min * 0.5) / (self.old_max * 0.5 - self.old_min * 0.5)
        }
    }
}

/// One column selected for rescaling.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRescale {
    pub column: usize,
    pub attribute: String,
    pub rescale: LinearRescale,
}

/// Validated set of column rescales for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationPlan {
    class_column: usize,
    columns: Vec<ColumnRescale>,
}

impl NormalizationPlan {
    /// Resolves `ranges` against `schema` and `stats`.
    ///
    /// # Errors
    ///
    /// - [`TransformError::UnknownAttribute`] if the class attribute or a range
    ///   names an attribute the schema does not declare
    /// - [`TransformError::ClassAttributeRange`] if a range targets the class attribute
    /// - [`TransformError::DuplicateRange`] if an attribute appears twice
    /// - [`TransformError::NonFiniteTarget`] if a target bound is NaN or infinite
    /// - [`TransformError::DegenerateRange`] if a selected column has `min == max`
    pub fn new(
        schema: &Schema,
        stats: &MinMaxTable,
        class_attribute: &str,
        ranges: &[RangeSpec],
    ) -> Result<Self> {
        let class_column =
            schema
                .index_of(class_attribute)
                .ok_or_else(|| TransformError::UnknownAttribute {
                    name: class_attribute.to_string(),
                })?;

        let mut seen = BTreeSet::new();
        let mut columns = Vec::with_capacity(ranges.len());
        for spec in ranges {
            let column =
                schema
                    .index_of(&spec.attribute)
                    .ok_or_else(|| TransformError::UnknownAttribute {
                        name: spec.attribute.clone(),
                    })?;
            if column == class_column {
                return Err(TransformError::ClassAttributeRange {
                    name: spec.attribute.clone(),
                });
            }
            if !seen.insert(column) {
                return Err(TransformError::DuplicateRange {
                    name: spec.attribute.clone(),
                });
            }
            if !(spec.new_min.is_finite() && spec.new_max.is_finite()) {
                return Err(TransformError::NonFiniteTarget {
                    attribute: spec.attribute.clone(),
                });
            }
            let observed = stats.get(column).ok_or(TransformError::UnknownColumn {
                column,
                columns: stats.len(),
            })?;
            let rescale = LinearRescale::new(observed, spec.new_min, spec.new_max).ok_or_else(
                || TransformError::DegenerateRange {
                    attribute: spec.attribute.clone(),
                    value: observed.min,
                },
            )?;
            columns.push(ColumnRescale {
                column,
                attribute: spec.attribute.clone(),
                rescale,
            });
        }
        columns.sort_by_key(|rescale| rescale.column);
        Ok(Self {
            class_column,
            columns,
        })
    }

    pub fn class_column(&self) -> usize {
        self.class_column
    }

    /// Selected columns in column order.
    pub fn columns(&self) -> &[ColumnRescale] {
        &self.columns
    }

    /// Rescale for `column`, if it was selected.
    pub fn rescale_for(&self, column: usize) -> Option<&LinearRescale> {
        self.columns
            .iter()
            .find(|rescale| rescale.column == column)
            .map(|rescale| &rescale.rescale)
    }

    /// Produces the normalized copy of `dataset`. The input is left untouched.
    pub fn apply(&self, dataset: &Dataset) -> Result<Dataset> {
        let width = dataset.column_count();
        if let Some(out_of_range) = self.columns.iter().find(|rescale| rescale.column >= width) {
            return Err(TransformError::UnknownColumn {
                column: out_of_range.column,
                columns: width,
            });
        }

        let mut rows = dataset.rows().to_vec();
        for selected in &self.columns {
            debug!(
                attribute = %selected.attribute,
                column = selected.column,
                "rescaling column"
            );
            for (index, row) in rows.iter_mut().enumerate() {
                let value = selected.rescale.apply(row[selected.column]);
                if !value.is_finite() {
                    return Err(TransformError::NonFiniteResult {
                        attribute: selected.attribute.clone(),
                        row: index + 1,
                    });
                }
                row[selected.column] = value;
            }
        }

        Ok(Dataset::from_rows(
            dataset.relation().map(str::to_string),
            dataset.schema().clone(),
            rows,
            dataset.limits(),
        )?)
    }
}

/// Convenience wrapper: plan and apply in one call.
pub fn normalize(
    dataset: &Dataset,
    stats: &MinMaxTable,
    class_attribute: &str,
    ranges: &[RangeSpec],
) -> Result<Dataset> {
    NormalizationPlan::new(dataset.schema(), stats, class_attribute, ranges)?.apply(dataset)
}
