//! Chart-type suggestion.
//!
//! The advisor looks at the filtered rows through the current axes and
//! proposes exactly one chart type with a short justification. Checks run in
//! a fixed order (time series, then small categorical, then numeric pair,
//! then bar) and inputs matching several predicates resolve to the first.

use crate::classify::{is_date_like, is_numeric_cell};
use crate::filter::FilteredRows;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Largest number of distinct categories for which a pie is suggested.
pub const PIE_SUGGESTION_MAX_CATEGORIES: usize = 8;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
    Pie,
    Doughnut,
    Scatter,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Area,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Scatter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Scatter => "scatter",
        }
    }

    /// Pie and doughnut share one data shape.
    pub fn is_radial(self) -> bool {
        matches!(self, ChartType::Pie | ChartType::Doughnut)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub chart_type: ChartType,
    pub reason: String,
}

impl Suggestion {
    fn new(chart_type: ChartType, reason: impl Into<String>) -> Self {
        Self {
            chart_type,
            reason: reason.into(),
        }
    }
}

/// True if there is at least one label and every label is date-like.
pub(crate) fn all_labels_date_like(rows: &FilteredRows<'_>) -> bool {
    !rows.is_empty() && rows.labels().all(|l| is_date_like(&l))
}

fn all_y_numeric(rows: &FilteredRows<'_>) -> bool {
    rows.y_cells(0).all(is_numeric_cell)
}

fn first_pair_numeric(rows: &FilteredRows<'_>) -> bool {
    rows.first_pair()
        .is_some_and(|(x, y)| is_numeric_cell(x) && is_numeric_cell(y))
}

/// Suggests a chart type for the filtered rows.
pub fn suggest_chart_type(rows: &FilteredRows<'_>) -> Suggestion {
    let suggestion = if rows.y_count() > 1 {
        suggest_multi_series(rows)
    } else {
        suggest_single_series(rows)
    };
    debug!(
        chart_type = %suggestion.chart_type,
        reason = %suggestion.reason,
        rows = rows.len(),
        "suggested chart type"
    );
    suggestion
}

fn suggest_single_series(rows: &FilteredRows<'_>) -> Suggestion {
    let x = rows.x_name();
    let y_numeric = all_y_numeric(rows);

    if all_labels_date_like(rows) && y_numeric {
        return Suggestion::new(
            ChartType::Line,
            format!("Line chart suggested because '{x}' looks like a time series."),
        );
    }

    let categories = rows.distinct_label_count();
    if categories <= PIE_SUGGESTION_MAX_CATEGORIES && y_numeric {
        return Suggestion::new(
            ChartType::Pie,
            format!(
                "Pie chart suggested because '{x}' has only {categories} categories with numeric values."
            ),
        );
    }

    if first_pair_numeric(rows) {
        return Suggestion::new(
            ChartType::Scatter,
            format!("Scatter chart suggested because '{x}' and the series are both numeric."),
        );
    }

    if rows.labels().all(|l| !is_date_like(&l)) {
        return Suggestion::new(
            ChartType::Bar,
            format!("Bar chart suggested because '{x}' holds text categories."),
        );
    }

    Suggestion::new(
        ChartType::Bar,
        "Bar chart suggested as the general-purpose default.",
    )
}

fn suggest_multi_series(rows: &FilteredRows<'_>) -> Suggestion {
    let x = rows.x_name();
    if all_labels_date_like(rows) {
        Suggestion::new(
            ChartType::Line,
            format!(
                "Line chart suggested to compare {} series over the time axis '{x}'.",
                rows.y_count()
            ),
        )
    } else {
        Suggestion::new(
            ChartType::Bar,
            format!(
                "Bar chart suggested to compare {} series across '{x}'.",
                rows.y_count()
            ),
        )
    }
}
