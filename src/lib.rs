//! chartlens: tabular inference and chart projection.
//!
//! Parses uploaded CSV/text and spreadsheet files into ordered tables,
//! infers which columns are numeric or textual, and projects tables into
//! pie, bar, line and area series plus CSV/JSON exports. Rendering is left
//! to the host.
//!
//! ```ignore
//! use chartlens::data::{load_upload, Upload};
//! use chartlens::{Dashboard, EngineSettings};
//!
//! let settings = EngineSettings::default();
//! let dataset = load_upload(&Upload::new("sales.csv", bytes), &settings)?;
//! let dashboard = Dashboard::build(&dataset, &settings);
//! ```

pub mod constants;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod types;

pub use dashboard::{Dashboard, PieChart, SeriesChart};
pub use settings::EngineSettings;
