//! Error types for the dataset model.

use thiserror::Error;

/// Which capacity bound was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Rows,
    Columns,
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Rows => f.write_str("rows"),
            Capacity::Columns => f.write_str("columns"),
        }
    }
}

/// Errors raised while building or reshaping a dataset.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Row or column count went past the configured maximum.
    #[error("capacity exceeded: more than {limit} {capacity}")]
    CapacityExceeded { capacity: Capacity, limit: usize },

    /// An attribute name was declared twice.
    #[error("duplicate attribute '{name}'")]
    DuplicateAttribute { name: String },

    /// A row does not carry one value per attribute.
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
