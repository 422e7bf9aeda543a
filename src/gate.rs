//! Per-chart-type legality for the current axis selection.

use crate::advisor::{all_labels_date_like, ChartType};
use crate::classify::is_numeric_cell;
use crate::filter::FilteredRows;
use serde::Serialize;

/// More distinct categories than this disables pie and doughnut.
pub const RADIAL_MAX_CATEGORIES: usize = 15;
/// Pie and doughnut need at least this many numeric values.
pub const RADIAL_MIN_VALUES: usize = 2;

/// Whether `chart_type` can be drawn for the filtered rows.
pub fn is_enabled(chart_type: ChartType, rows: &FilteredRows<'_>) -> bool {
    match chart_type {
        ChartType::Pie | ChartType::Doughnut => {
            rows.y_count() == 1
                && rows.distinct_label_count() <= RADIAL_MAX_CATEGORIES
                && rows.y_cells(0).filter(|c| is_numeric_cell(c)).count() >= RADIAL_MIN_VALUES
        }
        ChartType::Scatter => {
            rows.y_count() == 1
                && rows
                    .first_pair()
                    .is_some_and(|(x, y)| is_numeric_cell(x) && is_numeric_cell(y))
        }
        ChartType::Line | ChartType::Area => all_labels_date_like(rows),
        ChartType::Bar => rows.y_count() >= 1,
    }
}

/// Enable state of every chart type, in `ChartType::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability(Vec<(ChartType, bool)>);

impl Availability {
    pub fn evaluate(rows: &FilteredRows<'_>) -> Self {
        Self(
            ChartType::ALL
                .iter()
                .map(|&t| (t, is_enabled(t, rows)))
                .collect(),
        )
    }

    /// Nothing enabled; used when there is no axis selection at all.
    pub fn none() -> Self {
        Self(ChartType::ALL.iter().map(|&t| (t, false)).collect())
    }

    pub fn is_enabled(&self, chart_type: ChartType) -> bool {
        self.0
            .iter()
            .any(|&(t, enabled)| t == chart_type && enabled)
    }

    pub fn enabled(&self) -> impl Iterator<Item = ChartType> + '_ {
        self.0.iter().filter(|(_, e)| *e).map(|(t, _)| *t)
    }

    pub fn entries(&self) -> &[(ChartType, bool)] {
        &self.0
    }
}
