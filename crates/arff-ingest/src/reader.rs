//! Single-pass reader turning dataset text into a [`Dataset`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use arff_model::{Capacity, Dataset, Limits, ModelError, Schema};
use tracing::{debug, trace, warn};

use crate::data::{DataError, parse_row};
use crate::error::{IngestError, Result};
use crate::schema::{
    ATTRIBUTE_MARKER, COMMENT_PREFIX, DATA_MARKER, RELATION_MARKER, is_marker, parse_declaration,
    parse_relation,
};
use crate::tokenize::{DEFAULT_MAX_TOKENS, TokenLimits, tokenize};

/// Options controlling how a dataset file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub limits: Limits,
    pub tokens: TokenLimits,
}

impl ReadOptions {
    /// Options for the given capacity limits.
    ///
    /// The per-line token bound grows with `max_columns` so that a full-width
    /// data row always tokenizes.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            tokens: TokenLimits {
                max_tokens: limits.max_columns.max(DEFAULT_MAX_TOKENS),
                ..TokenLimits::default()
            },
        }
    }
}

/// Reads a dataset file from disk.
///
/// # Errors
///
/// Returns [`IngestError::FileOpen`] if the file cannot be opened, otherwise
/// any error from [`read_dataset`].
pub fn read_dataset_file(path: &Path, options: &ReadOptions) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading dataset file");
    read_dataset(BufReader::new(file), options)
}

/// Reads a dataset from any buffered source in one pass.
///
/// Header lines (`@relation`, `@attribute`) build the schema until the
/// `@data` marker; every later non-empty line is a numeric row. Blank lines
/// and `%` comments are skipped everywhere. A source without a data section
/// yields a dataset with no rows.
pub fn read_dataset<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Dataset> {
    let mut relation = None;
    let mut schema = Schema::new();
    let mut dataset: Option<Dataset> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|source| IngestError::Read {
            line: line_no,
            source,
        })?;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let tokens =
            tokenize(trimmed, &options.tokens).map_err(|source| IngestError::InputTooLarge {
                line: line_no,
                source,
            })?;
        let Some(first) = tokens.first().copied() else {
            continue;
        };

        if let Some(data) = dataset.as_mut() {
            let row = parse_row(&tokens).map_err(|source| IngestError::MalformedData {
                line: line_no,
                source,
            })?;
            if row.len() != data.column_count() {
                return Err(IngestError::MalformedData {
                    line: line_no,
                    source: DataError::RowWidth {
                        expected: data.column_count(),
                        found: row.len(),
                    },
                });
            }
            trace!(line = line_no, "data row");
            data.push_row(row).map_err(|source| IngestError::Model {
                line: line_no,
                source,
            })?;
        } else if is_marker(first, DATA_MARKER) {
            debug!(
                line = line_no,
                attributes = schema.len(),
                "data section starts"
            );
            let declared = Dataset::new(relation.take(), std::mem::take(&mut schema), options.limits)
                .map_err(|source| IngestError::Model {
                    line: line_no,
                    source,
                })?;
            dataset = Some(declared);
        } else if is_marker(first, ATTRIBUTE_MARKER) {
            let Some(attribute) = parse_declaration(&tokens) else {
                warn!(line = line_no, "skipping attribute declaration without a type");
                continue;
            };
            if schema.len() >= options.limits.max_columns {
                return Err(IngestError::Model {
                    line: line_no,
                    source: ModelError::CapacityExceeded {
                        capacity: Capacity::Columns,
                        limit: options.limits.max_columns,
                    },
                });
            }
            debug!(
                line = line_no,
                name = %attribute.name,
                declared_type = %attribute.declared_type,
                "attribute declared"
            );
            schema.push(attribute).map_err(|source| IngestError::Model {
                line: line_no,
                source,
            })?;
        } else if is_marker(first, RELATION_MARKER) {
            relation = parse_relation(&tokens);
        } else {
            debug!(line = line_no, "ignoring header line");
        }
    }

    match dataset {
        Some(dataset) => Ok(dataset),
        None => {
            warn!("no data section found");
            Dataset::new(relation, schema, options.limits)
                .map_err(|source| IngestError::Model { line: 0, source })
        }
    }
}
