//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestTableBuilder` - Builder pattern for delimited text fixtures
//! - `XlsxBuilder` - Builds minimal xlsx workbooks in memory
//! - Helper functions like `table_from_csv()` and `numbered_rows()`

#![allow(dead_code)]

use chartlens::data::{parse, SourceKind};
use chartlens::types::Table;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

// ============================================================================
// TestTableBuilder - Builder pattern for delimited text fixtures
// ============================================================================

/// Builder for CSV fixtures.
///
/// # Example
/// ```ignore
/// let csv = TestTableBuilder::new(&["region", "sales"])
///     .with_row(&["north", "10"])
///     .with_row(&["south", "5"])
///     .to_csv();
/// ```
pub struct TestTableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TestTableBuilder {
    /// Create a builder with the given header line.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add one data line.
    pub fn with_row(mut self, values: &[&str]) -> Self {
        self.rows.push(values.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Add `count` lines produced by `make_row(i)` for i in 0..count.
    pub fn with_rows<F>(mut self, count: usize, make_row: F) -> Self
    where
        F: Fn(usize) -> Vec<String>,
    {
        self.rows.extend((0..count).map(make_row));
        self
    }

    /// Render as delimited text with a trailing newline.
    pub fn to_csv(&self) -> String {
        let mut content = self.headers.join(",");
        content.push('\n');
        for row in &self.rows {
            content.push_str(&row.join(","));
            content.push('\n');
        }
        content
    }

    /// Parse the rendered text into a table.
    pub fn build(&self) -> Table {
        table_from_csv(&self.to_csv())
    }
}

/// Parse delimited text, panicking on failure.
pub fn table_from_csv(content: &str) -> Table {
    parse(content.as_bytes(), SourceKind::DelimitedText).expect("fixture should parse")
}

/// A single numeric column `v` holding 0..count.
pub fn numbered_rows(count: usize) -> Table {
    TestTableBuilder::new(&["v"])
        .with_rows(count, |i| vec![i.to_string()])
        .build()
}

// ============================================================================
// XlsxBuilder - minimal in-memory workbooks
// ============================================================================

/// A worksheet cell for [`XlsxBuilder`]
#[derive(Clone, Debug)]
pub enum XCell {
    Text(&'static str),
    Number(f64),
    Blank,
}

/// Builds a single-sheet xlsx workbook using inline strings.
pub struct XlsxBuilder {
    rows: Vec<Vec<XCell>>,
}

impl XlsxBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_row(mut self, cells: Vec<XCell>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Zip the workbook parts and return the file bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("xl/workbook.xml", WORKBOOK.to_string()),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
            ("xl/worksheets/sheet1.xml", self.sheet_xml()),
        ];
        for (name, content) in parts {
            zip.start_file(name, options).expect("start zip entry");
            zip.write_all(content.as_bytes()).expect("write zip entry");
        }

        zip.finish().expect("finish zip").into_inner()
    }

    fn sheet_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        for (r, row) in self.rows.iter().enumerate() {
            xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
            for (c, cell) in row.iter().enumerate() {
                let reference = format!("{}{}", column_letter(c), r + 1);
                match cell {
                    XCell::Text(s) => xml.push_str(&format!(
                        r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        reference, s
                    )),
                    XCell::Number(n) => {
                        xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n))
                    }
                    XCell::Blank => {}
                }
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData></worksheet>");
        xml
    }
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
