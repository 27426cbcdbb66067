//! Integration tests for dataset serialization.

use std::fs;
use std::io::Cursor;

use arff_ingest::{DEFAULT_MAX_TOKEN_LEN, ReadOptions, read_dataset, read_dataset_file};
use arff_model::{Attribute, ColumnRange, Dataset, Limits, MinMaxTable, Schema};
use arff_output::{OutputError, format_value, render_dataset, write_dataset};

fn schema() -> Schema {
    Schema::from_attributes([
        Attribute::new("a1", "numeric"),
        Attribute::new("a2", "numeric"),
        Attribute::new("class", "{0,1}"),
    ])
    .expect("schema")
}

fn render(relation: &str, dataset: &Dataset) -> String {
    let mut buffer = Vec::new();
    render_dataset(&mut buffer, relation, dataset).expect("render");
    String::from_utf8(buffer).expect("utf8")
}

#[test]
fn renders_minmax_table() {
    let table = MinMaxTable::new(vec![
        ColumnRange::new(1.0, 5.0),
        ColumnRange::new(10.0, 30.0),
        ColumnRange::new(0.0, 1.0),
    ]);
    let dataset = table.to_dataset(None, &schema()).expect("minmax dataset");

    insta::assert_snapshot!(render("MinMaxmmtest", &dataset), @r"
@relation MinMaxmmtest

@attribute a1 numeric
@attribute a2 numeric
@attribute class {0,1}
@data
1.000000 10.000000 0.000000
5.000000 30.000000 1.000000
");
}

#[test]
fn values_use_six_fractional_digits() {
    let dataset = Dataset::from_rows(
        None,
        schema(),
        vec![vec![0.1234567, -2.5, 1e7]],
        Limits::default(),
    )
    .expect("dataset");
    let text = render("r", &dataset);
    assert_eq!(text.lines().last(), Some("0.123457 -2.500000 10000000.000000"));
}

#[test]
fn write_then_read_round_trips() {
    let rows = vec![
        vec![0.25, 1.0 / 3.0, 0.0],
        vec![-7.125, 42.0, 1.0],
        vec![1e-7, 123456.789, 0.0],
    ];
    let dataset = Dataset::from_rows(None, schema(), rows, Limits::default()).expect("dataset");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("MinMaxNormalizemmtest.arff");

    write_dataset(&path, &dataset).expect("write");
    let reread = read_dataset_file(&path, &ReadOptions::default()).expect("read back");

    assert_eq!(reread.relation(), Some("MinMaxNormalizemmtest"));
    assert_eq!(reread.schema(), dataset.schema());
    assert_eq!(reread.row_count(), dataset.row_count());
    for (written, read) in dataset.rows().iter().zip(reread.rows()) {
        for (a, b) in written.iter().zip(read) {
            assert!((a - b).abs() <= 5e-7, "{a} vs {b}");
        }
    }
}

#[test]
fn rendered_text_parses_back() {
    let dataset = Dataset::from_rows(
        None,
        schema(),
        vec![vec![1.0, 2.0, 0.0]],
        Limits::default(),
    )
    .expect("dataset");
    let text = render("mmtest", &dataset);
    let reread = read_dataset(Cursor::new(text), &ReadOptions::default()).expect("parse");
    assert_eq!(reread.rows(), dataset.rows());
    assert_eq!(reread.relation(), Some("mmtest"));
}

#[test]
fn widest_value_fits_reader_token_limit() {
    assert_eq!(format_value(-f64::MAX).len(), DEFAULT_MAX_TOKEN_LEN);
}

#[test]
fn huge_values_read_back() {
    let rows = vec![vec![1e100, -f64::MAX, 0.0], vec![-1e93, f64::MAX, 1.0]];
    let dataset = Dataset::from_rows(None, schema(), rows, Limits::default()).expect("dataset");
    let text = render("huge", &dataset);
    let reread = read_dataset(Cursor::new(text), &ReadOptions::default()).expect("parse");
    for (written, read) in dataset.rows().iter().zip(reread.rows()) {
        for (a, b) in written.iter().zip(read) {
            assert!((a - b).abs() <= a.abs() * 1e-15, "{a} vs {b}");
        }
    }
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("out.arff");
    let dataset = Dataset::new(None, schema(), Limits::default()).expect("dataset");

    let err = write_dataset(&path, &dataset).expect_err("no parent dir");
    assert!(matches!(err, OutputError::FileWrite { .. }));
    assert!(!path.exists());
}

#[test]
fn write_replaces_existing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.arff");
    fs::write(&path, "stale contents that are longer than the new file\n".repeat(20))
        .expect("seed");
    let dataset = Dataset::new(None, schema(), Limits::default()).expect("dataset");

    write_dataset(&path, &dataset).expect("write");
    let text = fs::read_to_string(&path).expect("read");
    assert!(text.starts_with("@relation out\n"));
    assert!(text.ends_with("@data\n"));
}
