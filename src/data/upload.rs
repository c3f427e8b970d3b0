//! Upload boundary
//!
//! Validates an uploaded file, picks the parser from its extension and
//! produces the [`Dataset`] every chart and export works from.
//!
//! ## Limits
//!
//! Uploads larger than [`EngineSettings::max_upload_bytes`] (10 MiB by
//! default) and files whose extension is not csv, txt, xlsx or xls are
//! rejected before any parsing happens.

use crate::data::csv_parser::parse_delimited;
use crate::data::error::{DataError, DataResult};
use crate::data::spreadsheet::parse_spreadsheet;
use crate::perf::ScopedTimer;
use crate::settings::EngineSettings;
use crate::types::Table;
use std::borrow::Cow;
use std::path::Path;
use tracing::{info, warn};

/// How an upload's bytes are interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Comma-separated text (`.csv`, `.txt`)
    DelimitedText,
    /// Excel workbook (`.xlsx`, `.xls`)
    Spreadsheet,
}

impl SourceKind {
    /// Detect the source kind from a file name's extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> DataResult<Self> {
        let extension = extension_of(file_name);
        match extension.as_str() {
            "csv" | "txt" => Ok(SourceKind::DelimitedText),
            "xlsx" | "xls" => Ok(SourceKind::Spreadsheet),
            _ => Err(DataError::UnsupportedFormat { extension }),
        }
    }
}

/// Text after the last `.`, lowercased; a bare `.csv` counts as csv
fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
        .unwrap_or_default()
}

/// A file handed over by the host: its original name and raw bytes
#[derive(Clone, Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an upload from disk, keeping only the file name
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self { file_name, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// A successfully parsed upload
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub file_name: String,
    pub table: Table,
}

/// Check size and extension, returning the source kind to parse with
pub fn validate_upload(upload: &Upload, settings: &EngineSettings) -> DataResult<SourceKind> {
    if upload.size() > settings.max_upload_bytes {
        warn!(
            file = %upload.file_name,
            size_bytes = upload.size(),
            "Upload rejected: too large"
        );
        return Err(DataError::OversizeFile {
            size_bytes: upload.size(),
            max_bytes: settings.max_upload_bytes,
        });
    }

    SourceKind::from_file_name(&upload.file_name).inspect_err(|_| {
        warn!(file = %upload.file_name, "Upload rejected: unsupported format");
    })
}

/// Parse raw content of the given kind into a table.
///
/// Fails with [`DataError::EmptyPayload`] when no data rows result; a
/// partial table is never returned.
pub fn parse(content: &[u8], kind: SourceKind) -> DataResult<Table> {
    let table = match kind {
        SourceKind::DelimitedText => parse_delimited(&decode_text(content)),
        SourceKind::Spreadsheet => parse_spreadsheet(content)?,
    };

    if table.is_empty() {
        return Err(DataError::EmptyPayload);
    }
    Ok(table)
}

/// Decode text as UTF-8, replacing invalid sequences and dropping a leading BOM
fn decode_text(content: &[u8]) -> Cow<'_, str> {
    let content = content.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(content);
    String::from_utf8_lossy(content)
}

/// Validate and parse an upload.
pub fn load_upload(upload: &Upload, settings: &EngineSettings) -> DataResult<Dataset> {
    let _timer = ScopedTimer::with_default_threshold("load_upload");

    let kind = validate_upload(upload, settings)?;
    let table = parse(&upload.bytes, kind).inspect_err(|e| {
        warn!(file = %upload.file_name, error = %e, "Upload failed to parse");
    })?;

    info!(
        file = %upload.file_name,
        rows = table.row_count(),
        columns = table.column_count(),
        "Upload loaded"
    );

    Ok(Dataset {
        file_name: upload.file_name.clone(),
        table,
    })
}
