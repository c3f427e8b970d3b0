//! Error types for data operations
//!
//! Provides unified error handling for uploading, parsing and exporting
//! tables. Chart projection never fails and has no error type.

use thiserror::Error;

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// File extension is not one of csv, txt, xlsx, xls
    #[error("Unsupported file format '{extension}'. Please upload CSV, Excel, or text files.")]
    UnsupportedFormat { extension: String },

    /// Parsing produced no data rows
    #[error("No data found in the file.")]
    EmptyPayload,

    /// Workbook could not be decoded
    #[error("Malformed spreadsheet: {0}")]
    MalformedSpreadsheet(String),

    /// Upload exceeds the size ceiling
    #[error("File too large: {size_bytes} bytes (max {max_bytes} bytes)")]
    OversizeFile { size_bytes: u64, max_bytes: u64 },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings document holds an unusable value
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<calamine::Error> for DataError {
    fn from(e: calamine::Error) -> Self {
        DataError::MalformedSpreadsheet(e.to_string())
    }
}
