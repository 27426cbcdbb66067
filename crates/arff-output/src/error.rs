use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while naming or writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination could not be created or written.
    #[error("failed to write {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input path has no file name to derive output names from.
    #[error("input path {path} has no file name")]
    NoFileName { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, OutputError>;
