//! Presentation hand-off.
//!
//! Bundles everything a renderer needs for one dataset: header figures, the
//! column classification, and each chart's series with styling hints. The
//! renderer draws these structures without transforming the data further.

use crate::data::{
    classify, pie_slice_color, project_bar_with, project_pie_with, project_sequence_with,
    series_styles, Dataset, DatasetSummary, PiePoint, SeriesPoint, SeriesStyle,
};
use crate::perf::ScopedTimer;
use crate::settings::EngineSettings;
use crate::types::ChartKind;
use serde::Serialize;
use tracing::debug;

/// Pie slices and their palette colors, index-aligned
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PiePoint>,
    pub colors: Vec<&'static str>,
}

/// Points of a bar, line or area chart with one style per numeric series
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesChart {
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
    pub series: Vec<SeriesStyle>,
}

impl SeriesChart {
    fn new(kind: ChartKind, points: Vec<SeriesPoint>, series: Vec<SeriesStyle>) -> Self {
        Self {
            kind,
            points,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Every view of one dataset
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub file_name: String,
    pub summary: DatasetSummary,
    pub pie: PieChart,
    pub bar: SeriesChart,
    pub line: SeriesChart,
    pub area: SeriesChart,
}

impl Dashboard {
    /// Project a dataset into all chart views
    pub fn build(dataset: &Dataset, settings: &EngineSettings) -> Self {
        let _timer = ScopedTimer::with_default_threshold("build_dashboard");
        let table = &dataset.table;
        let limits = &settings.limits;
        let classification = classify(table);

        let slices = project_pie_with(table, limits);
        let colors = (0..slices.len()).map(pie_slice_color).collect();
        let sequence = project_sequence_with(table, limits);

        let dashboard = Self {
            file_name: dataset.file_name.clone(),
            summary: DatasetSummary::from_table(table),
            pie: PieChart { slices, colors },
            bar: SeriesChart::new(
                ChartKind::Bar,
                project_bar_with(table, limits),
                series_styles(&classification, ChartKind::Bar),
            ),
            line: SeriesChart::new(
                ChartKind::Line,
                sequence.clone(),
                series_styles(&classification, ChartKind::Line),
            ),
            area: SeriesChart::new(
                ChartKind::Area,
                sequence,
                series_styles(&classification, ChartKind::Area),
            ),
        };

        debug!(
            file = %dashboard.file_name,
            pie = dashboard.pie.slices.len(),
            bar = dashboard.bar.points.len(),
            sequence = dashboard.line.points.len(),
            "Dashboard built"
        );
        dashboard
    }

    /// The series chart for a kind; `None` for pie
    pub fn series_chart(&self, kind: ChartKind) -> Option<&SeriesChart> {
        match kind {
            ChartKind::Pie => None,
            ChartKind::Bar => Some(&self.bar),
            ChartKind::Line => Some(&self.line),
            ChartKind::Area => Some(&self.area),
        }
    }
}
