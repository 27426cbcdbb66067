//! Dataset ingestion.
//!
//! Reads the attribute-declaration text format into an [`arff_model::Dataset`]:
//!
//! ```text
//! @relation mmtest
//!
//! @attribute a1 numeric
//! @attribute class numeric
//! @data
//! 1 0
//! 3 1
//! ```
//!
//! - **Tokenizer**: whitespace splitting with bounded token count and length
//! - **Schema reader**: `@relation` and `@attribute` lines
//! - **Data reader**: strict numeric rows after `@data`
//!
//! # Example
//!
//! ```ignore
//! use arff_ingest::{ReadOptions, read_dataset_file};
//!
//! let dataset = read_dataset_file(Path::new("mmtest.arff"), &ReadOptions::default())?;
//! println!("{} rows", dataset.row_count());
//! ```

mod data;
mod error;
mod reader;
mod schema;
mod tokenize;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{ReadOptions, read_dataset, read_dataset_file};

// === Line Parsing ===
pub use data::{DataError, parse_row, parse_value};
pub use schema::{
    ATTRIBUTE_MARKER, COMMENT_PREFIX, DATA_MARKER, RELATION_MARKER, is_marker, parse_declaration,
    parse_relation,
};
pub use tokenize::{
    DEFAULT_MAX_TOKEN_LEN, DEFAULT_MAX_TOKENS, TokenLimits, TokenizeError, tokenize,
};
