//! Integration tests for reading dataset files.

use std::io::{Cursor, Write};

use arff_ingest::{
    DEFAULT_MAX_TOKEN_LEN, DataError, IngestError, ReadOptions, TokenizeError, read_dataset,
    read_dataset_file,
};
use arff_model::{Capacity, Limits, ModelError};

const MMTEST: &str = "@relation mmtest

@attribute a1 numeric
@attribute a2 numeric
@attribute class numeric
@data
1 10 0
3 20 1
5 30 0
";

fn read_str(contents: &str) -> Result<arff_model::Dataset, IngestError> {
    read_dataset(Cursor::new(contents), &ReadOptions::default())
}

#[test]
fn reads_schema_and_rows() {
    let dataset = read_str(MMTEST).expect("read dataset");

    assert_eq!(dataset.relation(), Some("mmtest"));
    assert_eq!(
        dataset.schema().names().collect::<Vec<_>>(),
        vec!["a1", "a2", "class"]
    );
    assert_eq!(dataset.schema().attributes()[0].declared_type, "numeric");
    assert_eq!(
        dataset.rows(),
        &[
            vec![1.0, 10.0, 0.0],
            vec![3.0, 20.0, 1.0],
            vec![5.0, 30.0, 0.0]
        ]
    );
}

#[test]
fn reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(MMTEST.as_bytes()).expect("write");

    let dataset = read_dataset_file(file.path(), &ReadOptions::default()).expect("read file");
    assert_eq!(dataset.row_count(), 3);
}

#[test]
fn missing_file_is_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_dataset_file(&dir.path().join("absent.arff"), &ReadOptions::default())
        .expect_err("missing file");
    assert!(matches!(err, IngestError::FileOpen { .. }));
}

#[test]
fn skips_comments_blank_lines_and_unknown_header_lines() {
    let contents = "% leading comment
@RELATION weather
@comment ignored
@ATTRIBUTE temp REAL

@Attribute humidity real
@DATA
% a comment inside data
85 85

80 90
";
    let dataset = read_str(contents).expect("read dataset");
    assert_eq!(dataset.relation(), Some("weather"));
    assert_eq!(dataset.column_count(), 2);
    assert_eq!(dataset.rows(), &[vec![85.0, 85.0], vec![80.0, 90.0]]);
}

#[test]
fn short_declaration_is_skipped() {
    let contents = "@attribute a1 numeric
@attribute broken
@attribute a2 numeric
@data
1 2
";
    let dataset = read_str(contents).expect("read dataset");
    assert_eq!(dataset.schema().names().collect::<Vec<_>>(), vec!["a1", "a2"]);
}

#[test]
fn declarations_after_data_marker_are_data() {
    let contents = "@attribute a1 numeric
@data
@attribute a2 numeric
";
    let err = read_str(contents).expect_err("declaration in data");
    assert!(matches!(err, IngestError::MalformedData { line: 3, .. }));
}

#[test]
fn non_numeric_value_is_malformed() {
    let contents = "@attribute a1 numeric
@attribute a2 numeric
@data
1 2
3 abc
";
    let err = read_str(contents).expect_err("bad value");
    match err {
        IngestError::MalformedData { line, source } => {
            assert_eq!(line, 5);
            assert_eq!(
                source,
                DataError::NotANumber {
                    token: "abc".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn row_width_must_match_schema() {
    let contents = "@attribute a1 numeric
@attribute a2 numeric
@data
1 2 3
";
    let err = read_str(contents).expect_err("wide row");
    match err {
        IngestError::MalformedData { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(
                source,
                DataError::RowWidth {
                    expected: 2,
                    found: 3
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_attribute_is_rejected() {
    let contents = "@attribute a1 numeric
@attribute a1 real
@data
";
    let err = read_str(contents).expect_err("duplicate");
    assert!(matches!(
        err,
        IngestError::Model {
            line: 2,
            source: ModelError::DuplicateAttribute { .. }
        }
    ));
}

#[test]
fn row_capacity_is_enforced() {
    let options = ReadOptions::with_limits(Limits::default().with_max_rows(2));
    let err = read_dataset(Cursor::new(MMTEST), &options).expect_err("too many rows");
    assert!(matches!(
        err,
        IngestError::Model {
            line: 9,
            source: ModelError::CapacityExceeded {
                capacity: Capacity::Rows,
                limit: 2
            }
        }
    ));
}

#[test]
fn column_capacity_is_enforced() {
    let options = ReadOptions::with_limits(Limits::default().with_max_columns(2));
    let err = read_dataset(Cursor::new(MMTEST), &options).expect_err("too many columns");
    assert!(matches!(
        err,
        IngestError::Model {
            line: 5,
            source: ModelError::CapacityExceeded {
                capacity: Capacity::Columns,
                limit: 2
            }
        }
    ));
}

#[test]
fn oversized_token_is_input_too_large() {
    let length = DEFAULT_MAX_TOKEN_LEN + 1;
    let contents = format!("@attribute {} numeric\n@data\n", "x".repeat(length));
    let err = read_str(&contents).expect_err("long name");
    match err {
        IngestError::InputTooLarge { line, source } => {
            assert_eq!(line, 1);
            assert_eq!(
                source,
                TokenizeError::TokenTooLong {
                    length,
                    limit: DEFAULT_MAX_TOKEN_LEN
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_data_section_yields_empty_dataset() {
    let dataset = read_str("@attribute a1 numeric\n").expect("read dataset");
    assert_eq!(dataset.column_count(), 1);
    assert!(dataset.is_empty());
}

#[test]
fn wide_limits_raise_token_bound() {
    let options = ReadOptions::with_limits(Limits::default().with_max_columns(150));
    assert_eq!(options.tokens.max_tokens, 150);
    assert_eq!(ReadOptions::default().tokens.max_tokens, 100);
}
