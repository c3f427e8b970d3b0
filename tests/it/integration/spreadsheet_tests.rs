//! Spreadsheet upload tests using in-memory xlsx workbooks.

use crate::helpers::{XCell, XlsxBuilder};
use chartlens::data::{classify, load_upload, project_pie, DataError, PiePoint, Upload};
use chartlens::types::CellValue;
use chartlens::EngineSettings;

fn sample_workbook() -> Vec<u8> {
    XlsxBuilder::new()
        .with_row(vec![XCell::Text("region"), XCell::Text("sales"), XCell::Text("code")])
        .with_row(vec![XCell::Text("north"), XCell::Number(10.0), XCell::Text("7")])
        .with_row(vec![XCell::Text("south"), XCell::Number(2.5), XCell::Blank])
        .with_row(vec![XCell::Text("north"), XCell::Number(4.0), XCell::Number(8.0)])
        .build()
}

#[test]
fn test_xlsx_upload_keeps_native_types() {
    let upload = Upload::new("regions.xlsx", sample_workbook());
    let dataset = load_upload(&upload, &EngineSettings::default()).unwrap();
    let table = &dataset.table;

    assert_eq!(table.columns(), &["region", "sales", "code"]);
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.value(0, "sales"), Some(&CellValue::Number(10.0)));
    // Text cells are not coerced even when they look numeric
    assert_eq!(table.value(0, "code"), Some(&CellValue::text("7")));
    assert_eq!(table.value(1, "code"), Some(&CellValue::Empty));
}

#[test]
fn test_xlsx_classification_and_pie() {
    let upload = Upload::new("regions.XLSX", sample_workbook());
    let dataset = load_upload(&upload, &EngineSettings::default()).unwrap();

    let classification = classify(&dataset.table);
    assert_eq!(classification.numeric_columns, vec!["sales", "code"]);
    assert_eq!(classification.text_columns, vec!["region", "code"]);

    assert_eq!(
        project_pie(&dataset.table),
        vec![
            PiePoint { name: "north".into(), value: 14.0 },
            PiePoint { name: "south".into(), value: 2.5 },
        ]
    );
}

#[test]
fn test_header_only_workbook_is_empty() {
    let bytes = XlsxBuilder::new()
        .with_row(vec![XCell::Text("a"), XCell::Text("b")])
        .build();

    assert!(matches!(
        load_upload(&Upload::new("empty.xlsx", bytes), &EngineSettings::default()),
        Err(DataError::EmptyPayload)
    ));
}

#[test]
fn test_corrupt_workbook_is_malformed() {
    let upload = Upload::new("broken.xls", b"PK\x03\x04 not really a zip".to_vec());

    assert!(matches!(
        load_upload(&upload, &EngineSettings::default()),
        Err(DataError::MalformedSpreadsheet(_))
    ));
}
