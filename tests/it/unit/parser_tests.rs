//! Unit tests for the table parsers.

use crate::helpers::{table_from_csv, TestTableBuilder};
use chartlens::data::{coerce_token, parse, DataError, SourceKind};
use chartlens::types::CellValue;

#[test]
fn test_row_and_column_counts_follow_header() {
    for (columns, rows) in [(1, 1), (3, 4), (5, 12)] {
        let headers: Vec<String> = (0..columns).map(|c| format!("col{}", c)).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        let table = TestTableBuilder::new(&header_refs)
            .with_rows(rows, |r| (0..columns).map(|c| format!("{}", r * c)).collect())
            .build();

        assert_eq!(table.row_count(), rows);
        assert_eq!(table.columns(), headers.as_slice());
        assert!(table.rows().iter().all(|row| row.cells().len() == columns));
    }
}

#[test]
fn test_value_coercion() {
    assert_eq!(coerce_token("42"), CellValue::Number(42.0));
    assert_eq!(coerce_token("42abc"), CellValue::text("42abc"));
    assert_eq!(coerce_token(""), CellValue::text(""));
}

#[test]
fn test_empty_content_is_rejected() {
    assert!(matches!(
        parse(b"", SourceKind::DelimitedText),
        Err(DataError::EmptyPayload)
    ));
    assert!(matches!(
        parse(b"only,a,header", SourceKind::DelimitedText),
        Err(DataError::EmptyPayload)
    ));
}

#[test]
fn test_garbage_spreadsheet_is_malformed() {
    assert!(matches!(
        parse(b"a,b\n1,2", SourceKind::Spreadsheet),
        Err(DataError::MalformedSpreadsheet(_))
    ));
}

#[test]
fn test_blank_lines_become_blank_rows() {
    let table = table_from_csv("a,b\n1,2\n\n3,4");

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.rows()[1].cells(), &[CellValue::text(""), CellValue::text("")]);
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let table = parse(b"name,v\ncaf\xE9,1", SourceKind::DelimitedText).unwrap();
    assert_eq!(table.value(0, "name"), Some(&CellValue::text("caf\u{FFFD}")));
}
