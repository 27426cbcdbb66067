//! Output generation: dataset text files and their names.

mod error;
mod naming;
mod writer;

pub use error::{OutputError, Result};
pub use naming::{
    ARFF_SUFFIX, MINMAX_PREFIX, NORMALIZED_PREFIX, OutputPaths, prefixed_file_name, relation_name,
};
pub use writer::{format_value, render_dataset, write_dataset};
