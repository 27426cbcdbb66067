//! Error types for dataset ingestion.

use std::path::PathBuf;

use arff_model::ModelError;
use thiserror::Error;

use crate::data::DataError;
use crate::tokenize::TokenizeError;

/// Errors that can occur while reading a dataset file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file could not be opened.
    #[error("failed to open {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from the input failed.
    #[error("line {line}: read failed")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// A line exceeded the tokenizer bounds.
    #[error("line {line}: input too large")]
    InputTooLarge {
        line: usize,
        #[source]
        source: TokenizeError,
    },

    /// A data line could not be turned into a numeric row.
    #[error("line {line}: malformed data")]
    MalformedData {
        line: usize,
        #[source]
        source: DataError,
    },

    // === Model Errors ===
    /// The parsed content violates a dataset invariant (capacity, duplicates).
    #[error("line {line}: invalid dataset")]
    Model {
        line: usize,
        #[source]
        source: ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
