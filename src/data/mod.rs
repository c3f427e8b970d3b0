//! Data parsing, inference and chart projection
//!
//! This module turns uploaded files into tables and tables into the series
//! each chart kind consumes.
//!
//! ## Pipeline
//!
//! 1. [`load_upload`] validates an [`Upload`] and parses it with
//!    [`parse_delimited`] or [`parse_spreadsheet`]
//! 2. [`classify`] splits columns into numeric and text sets
//! 3. The projectors ([`project_pie`], [`project_bar`], [`project_line`],
//!    [`project_area`]) build chart series, grouping through [`group_by`]
//! 4. [`export_table`] renders CSV or JSON for download
//!
//! ## Error Handling
//!
//! Parsing and export return `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `UnsupportedFormat`: extension not csv, txt, xlsx or xls
//! - `OversizeFile`: upload exceeds the size ceiling
//! - `EmptyPayload`: no data rows after parsing
//! - `MalformedSpreadsheet`: workbook could not be decoded
//!
//! Projectors never fail; a table with nothing to plot yields empty series.

mod aggregate;
mod chart_engine;
mod csv_parser;
mod error;
mod export;
mod inference;
mod json_parser;
mod spreadsheet;
mod upload;

pub use aggregate::*;
pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use export::*;
pub use inference::*;
pub use json_parser::*;
pub use spreadsheet::*;
pub use upload::*;
