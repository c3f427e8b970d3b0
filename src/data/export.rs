//! Download boundary
//!
//! Renders a table as CSV or JSON and hands the text to a host-supplied
//! [`TextExporter`], which decides what "download" means (a browser blob,
//! a file on disk, a clipboard, ...).

use crate::constants::EXPORT_SUFFIX;
use crate::data::csv_parser::write_csv_content;
use crate::data::error::DataResult;
use crate::data::json_parser::write_json_content;
use crate::types::Table;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Export text formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Render a table in this format
    pub fn render(&self, table: &Table) -> String {
        match self {
            ExportFormat::Csv => write_csv_content(table),
            ExportFormat::Json => write_json_content(table),
        }
    }
}

/// Capability to deliver exported text to the user
pub trait TextExporter {
    fn export_text(&mut self, content: &str, file_name: &str, mime_type: &str) -> DataResult<()>;
}

/// Writes exports as files into a directory
#[derive(Clone, Debug)]
pub struct FileExporter {
    dir: PathBuf,
}

impl FileExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TextExporter for FileExporter {
    fn export_text(&mut self, content: &str, file_name: &str, _mime_type: &str) -> DataResult<()> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, content)?;
        info!("Exported {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

/// Download name for an export: the original name up to its first `.`,
/// then `_processed.<ext>`.
///
/// # Examples
/// - `sales.csv` + CSV -> `sales_processed.csv`
/// - `q1.report.xlsx` + JSON -> `q1_processed.json`
pub fn export_file_name(original_file_name: &str, format: ExportFormat) -> String {
    let base = original_file_name.split('.').next().unwrap_or_default();
    format!("{}{}.{}", base, EXPORT_SUFFIX, format.extension())
}

/// Render `table` and deliver it through `exporter`.
///
/// Returns the file name used.
pub fn export_table(
    table: &Table,
    format: ExportFormat,
    original_file_name: &str,
    exporter: &mut impl TextExporter,
) -> DataResult<String> {
    let file_name = export_file_name(original_file_name, format);
    let content = format.render(table);
    exporter.export_text(&content, &file_name, format.mime_type())?;
    Ok(file_name)
}
