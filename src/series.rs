//! Conversion of filtered rows into the data shapes renderers consume.

use crate::advisor::ChartType;
use crate::classify::to_numeric_or_null;
use crate::filter::FilteredRows;
use serde::Serialize;

/// Fewer non-null numeric values than this across all series is not chartable.
pub const MIN_NUMERIC_VALUES: usize = 2;

/// Fill and border colors, cycled per series or per slice.
pub const PALETTE: [(&str, &str); 8] = [
    ("rgba(59,130,246,0.6)", "rgba(37,99,235,1)"),
    ("rgba(16,185,129,0.6)", "rgba(5,150,105,1)"),
    ("rgba(245,158,11,0.6)", "rgba(217,119,6,1)"),
    ("rgba(239,68,68,0.6)", "rgba(220,38,38,1)"),
    ("rgba(139,92,246,0.6)", "rgba(124,58,237,1)"),
    ("rgba(236,72,153,0.6)", "rgba(219,39,119,1)"),
    ("rgba(20,184,166,0.6)", "rgba(13,148,136,1)"),
    ("rgba(107,114,128,0.6)", "rgba(75,85,99,1)"),
];

pub fn palette_color(index: usize) -> (&'static str, &'static str) {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Labels plus one value vector per Y column, all the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub series: Vec<NamedSeries>,
}

impl SeriesData {
    /// Non-null numeric values across every series.
    pub fn numeric_count(&self) -> usize {
        self.series
            .iter()
            .map(|s| s.values.iter().filter(|v| v.is_some()).count())
            .sum()
    }

    pub fn is_chartable(&self) -> bool {
        self.numeric_count() >= MIN_NUMERIC_VALUES
    }
}

pub fn build_series(rows: &FilteredRows<'_>) -> SeriesData {
    let labels = rows.labels().collect();
    let series = rows
        .y_names()
        .enumerate()
        .map(|(i, name)| NamedSeries {
            name: name.to_string(),
            values: rows.y_cells(i).map(to_numeric_or_null).collect(),
        })
        .collect();
    SeriesData { labels, series }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScatterPoint {
    /// Both coordinates, if the point can be plotted.
    pub fn coordinates(&self) -> Option<[f64; 2]> {
        Some([self.x?, self.y?])
    }
}

/// One point per filtered row, pairing the X cell with the first Y cell.
pub fn build_scatter_points(rows: &FilteredRows<'_>) -> Vec<ScatterPoint> {
    rows.x_cells()
        .zip(rows.y_cells(0))
        .map(|(x, y)| ScatterPoint {
            x: to_numeric_or_null(x),
            y: to_numeric_or_null(y),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Slices from the first series; rows without a value are left out.
pub fn build_pie_slices(data: &SeriesData) -> Vec<PieSlice> {
    let Some(first) = data.series.first() else {
        return Vec::new();
    };
    data.labels
        .iter()
        .zip(&first.values)
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .enumerate()
        .map(|(i, (label, value))| PieSlice {
            label: label.clone(),
            value,
            color: palette_color(i).0,
        })
        .collect()
}

/// A colored series descriptor for bar, line and area renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub fill: bool,
}

pub fn build_datasets(data: &SeriesData, chart_type: ChartType) -> Vec<Dataset> {
    data.series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (background_color, border_color) = palette_color(i);
            Dataset {
                label: s.name.clone(),
                data: s.values.clone(),
                background_color,
                border_color,
                fill: chart_type == ChartType::Area,
            }
        })
        .collect()
}
