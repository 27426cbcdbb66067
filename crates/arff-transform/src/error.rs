use arff_model::ModelError;
use thiserror::Error;

/// Errors raised while computing statistics or rescaling columns.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// Statistics need at least one row.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// Column index outside the dataset.
    #[error("column {column} out of range for {columns} columns")]
    UnknownColumn { column: usize, columns: usize },

    /// Name not declared in the schema.
    #[error("unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    /// A target range was requested for the class attribute.
    #[error("attribute '{name}' is the class attribute and cannot be normalized")]
    ClassAttributeRange { name: String },

    /// The same attribute was given two target ranges.
    #[error("attribute '{name}' has more than one target range")]
    DuplicateRange { name: String },

    /// Every value of a selected column is identical, so the scale is undefined.
    #[error("attribute '{attribute}' has min == max == {value}; cannot rescale")]
    DegenerateRange { attribute: String, value: f64 },

    /// A target bound is NaN or infinite.
    #[error("attribute '{attribute}' has a non-finite target range")]
    NonFiniteTarget { attribute: String },

    /// Rescaling produced a value that cannot be written.
    #[error("attribute '{attribute}' row {row}: rescaled value is not finite")]
    NonFiniteResult { attribute: String, row: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
