//! The chart state of one displayed result and the bundle handed to renderers.
//!
//! A [`ChartSession`] is an immutable value. Every user action returns a new
//! session with all derived state (category options, suggestion, enabled
//! chart types) recomputed, so the axis selection, the category filter and
//! the chart-type override can never drift apart.

use crate::advisor::{suggest_chart_type, ChartType, Suggestion};
use crate::error::SelectionError;
use crate::filter::{CategoryFilter, FilteredRows};
use crate::gate::Availability;
use crate::guard::{check_structure, Unchartable};
use crate::profile::{profile_columns, TableProfile};
use crate::series::{
    build_datasets, build_pie_slices, build_scatter_points, build_series, Dataset, PieSlice,
    ScatterPoint, SeriesData,
};
use crate::table::TabularResult;
use indexmap::IndexSet;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSelection {
    pub x_column: String,
    pub y_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTypeSelection {
    pub explicit: Option<ChartType>,
    pub suggested: Suggestion,
}

#[derive(Debug, Clone)]
pub struct ChartSession {
    result: Arc<TabularResult>,
    profile: Arc<TableProfile>,
    axes: Option<AxisSelection>,
    filter: Option<CategoryFilter>,
    chart: ChartTypeSelection,
    availability: Availability,
    data_labels: bool,
}

impl ChartSession {
    /// Starts a session on a new result with the profiler's default axes.
    pub fn new(result: TabularResult) -> Self {
        let profile = profile_columns(&result);
        let axes = match &profile.default_x {
            Some(x) if result.width() >= 2 => Some(AxisSelection {
                x_column: x.clone(),
                y_columns: profile.default_y_columns.clone(),
            }),
            _ => None,
        };
        let filter = axes
            .as_ref()
            .and_then(|a| result.column_index(&a.x_column))
            .map(|x_idx| CategoryFilter::all(&result, x_idx));

        Self {
            result: Arc::new(result),
            profile: Arc::new(profile),
            axes,
            filter,
            chart: ChartTypeSelection {
                explicit: None,
                suggested: Suggestion {
                    chart_type: ChartType::Bar,
                    reason: String::new(),
                },
            },
            availability: Availability::none(),
            data_labels: false,
        }
        .resolved()
    }

    pub fn result(&self) -> &TabularResult {
        &self.result
    }

    pub fn profile(&self) -> &TableProfile {
        &self.profile
    }

    pub fn axes(&self) -> Option<&AxisSelection> {
        self.axes.as_ref()
    }

    pub fn category_filter(&self) -> Option<&CategoryFilter> {
        self.filter.as_ref()
    }

    pub fn chart_selection(&self) -> &ChartTypeSelection {
        &self.chart
    }

    pub fn suggestion(&self) -> &Suggestion {
        &self.chart.suggested
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn data_labels(&self) -> bool {
        self.data_labels
    }

    /// The explicit override if it is still legal, else the suggestion.
    ///
    /// Falls back to bar when even the suggestion is not enabled, which only
    /// happens on results that are not chartable anyway.
    pub fn effective_chart_type(&self) -> ChartType {
        match self.chart.explicit {
            Some(t) if self.availability.is_enabled(t) => t,
            _ if self.availability.is_enabled(self.chart.suggested.chart_type) => {
                self.chart.suggested.chart_type
            }
            _ => ChartType::Bar,
        }
    }

    /// Changes the X column.
    ///
    /// The category filter is reset to every category of the new column. The
    /// Y columns are kept unless they are no longer a valid series selection.
    pub fn with_x_column(&self, x_column: &str) -> Result<Self, SelectionError> {
        let axes = self.axes.as_ref().ok_or(SelectionError::NoAxes)?;
        let x_idx = self
            .result
            .column_index(x_column)
            .ok_or_else(|| SelectionError::ColumnNotFound(x_column.to_string()))?;

        let y_columns = if self.is_valid_series(&axes.y_columns) {
            axes.y_columns.clone()
        } else {
            self.profile.default_y_for(x_column)
        };

        debug!(x_column, ?y_columns, "x column changed");
        Ok(Self {
            axes: Some(AxisSelection {
                x_column: x_column.to_string(),
                y_columns,
            }),
            filter: Some(CategoryFilter::all(&self.result, x_idx)),
            ..self.clone()
        }
        .resolved())
    }

    /// Replaces the Y columns. Duplicates are dropped, order is kept.
    pub fn with_y_columns<I, S>(&self, y_columns: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let axes = self.axes.as_ref().ok_or(SelectionError::NoAxes)?;
        let y_columns: IndexSet<String> = y_columns
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        if y_columns.is_empty() {
            return Err(SelectionError::EmptySeries);
        }
        for name in &y_columns {
            if self.result.column_index(name).is_none() {
                return Err(SelectionError::ColumnNotFound(name.clone()));
            }
            if !self.profile.is_numeric(name) {
                return Err(SelectionError::NotNumeric(name.clone()));
            }
        }

        debug!(?y_columns, "y columns changed");
        Ok(Self {
            axes: Some(AxisSelection {
                x_column: axes.x_column.clone(),
                y_columns: y_columns.into_iter().collect(),
            }),
            ..self.clone()
        }
        .resolved())
    }

    /// Restricts the chart to the given X categories. Unknown ones are ignored.
    pub fn with_categories<I, S>(&self, categories: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = self.filter.as_ref().ok_or(SelectionError::NoAxes)?;
        let filter = filter.with_selection(categories);
        debug!(selected = filter.selected().len(), "category filter changed");
        Ok(Self {
            filter: Some(filter),
            ..self.clone()
        }
        .resolved())
    }

    /// Sets or clears the chart-type override.
    ///
    /// An override that is not enabled for the current selection is dropped
    /// and the suggestion applies.
    pub fn with_chart_type(&self, chart_type: Option<ChartType>) -> Self {
        Self {
            chart: ChartTypeSelection {
                explicit: chart_type,
                suggested: self.chart.suggested.clone(),
            },
            ..self.clone()
        }
        .resolved()
    }

    pub fn with_data_labels(&self, data_labels: bool) -> Self {
        Self {
            data_labels,
            ..self.clone()
        }
    }

    fn is_valid_series(&self, y_columns: &[String]) -> bool {
        !y_columns.is_empty() && y_columns.iter().all(|c| self.profile.is_numeric(c))
    }

    fn filtered_rows(&self) -> Option<FilteredRows<'_>> {
        let axes = self.axes.as_ref()?;
        let filter = self.filter.as_ref()?;
        let x_idx = self.result.column_index(&axes.x_column)?;
        let y_idxs = axes
            .y_columns
            .iter()
            .filter_map(|c| self.result.column_index(c))
            .collect();
        Some(FilteredRows::new(&self.result, filter, x_idx, y_idxs))
    }

    /// Recomputes the suggestion and the gate, then drops an illegal override.
    fn resolved(mut self) -> Self {
        let (suggested, availability) = match self.filtered_rows() {
            Some(rows) => (suggest_chart_type(&rows), Availability::evaluate(&rows)),
            None => (
                Suggestion {
                    chart_type: ChartType::Bar,
                    reason: "No axes can be selected for this result.".to_string(),
                },
                Availability::none(),
            ),
        };

        if let Some(explicit) = self.chart.explicit {
            if !availability.is_enabled(explicit) {
                debug!(%explicit, "chart type override no longer available, using suggestion");
                self.chart.explicit = None;
            }
        }
        self.chart.suggested = suggested;
        self.availability = availability;
        self
    }

    /// Series data for the current selection, if there are axes.
    pub fn series_data(&self) -> Option<SeriesData> {
        self.filtered_rows().map(|rows| build_series(&rows))
    }

    /// Everything a renderer needs, or the reason nothing can be drawn.
    pub fn view(&self) -> ChartView {
        if let Some(reason) = check_structure(&self.result) {
            return ChartView::unavailable(reason);
        }
        let (Some(axes), Some(filter), Some(rows)) =
            (self.axes.as_ref(), self.filter.as_ref(), self.filtered_rows())
        else {
            return ChartView::unavailable(Unchartable::NotEnoughData);
        };

        let data = build_series(&rows);
        if !data.is_chartable() {
            return ChartView::unavailable(Unchartable::InsufficientNumericValues {
                columns: axes.y_columns.clone(),
            });
        }

        let chart_type = self.effective_chart_type();
        let payload = match chart_type {
            ChartType::Pie | ChartType::Doughnut => ChartPayload::Pie(build_pie_slices(&data)),
            ChartType::Scatter => ChartPayload::Scatter(build_scatter_points(&rows)),
            _ => ChartPayload::Series(build_datasets(&data, chart_type)),
        };

        ChartView::Ready(ChartBundle {
            chart_type,
            title: format!("{} by {}", axes.y_columns.join(", "), axes.x_column),
            x_column: axes.x_column.clone(),
            y_columns: axes.y_columns.clone(),
            labels: data.labels,
            payload,
            category_options: filter.options().iter().cloned().collect(),
            selected_categories: filter.selected().iter().cloned().collect(),
            x_options: self.result.columns.clone(),
            y_options: self
                .profile
                .numeric_columns()
                .map(str::to_string)
                .collect(),
            enabled_types: self.availability.enabled().collect(),
            suggested_type: self.chart.suggested.chart_type,
            suggestion_text: self.chart.suggested.reason.clone(),
            data_labels: self.data_labels,
        })
    }
}

/// Chart data in the shape of the renderer family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartPayload {
    Series(Vec<Dataset>),
    Pie(Vec<PieSlice>),
    Scatter(Vec<ScatterPoint>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBundle {
    pub chart_type: ChartType,
    pub title: String,
    pub x_column: String,
    pub y_columns: Vec<String>,
    pub labels: Vec<String>,
    pub payload: ChartPayload,
    pub category_options: Vec<String>,
    pub selected_categories: Vec<String>,
    pub x_options: Vec<String>,
    pub y_options: Vec<String>,
    pub enabled_types: Vec<ChartType>,
    pub suggested_type: ChartType,
    pub suggestion_text: String,
    pub data_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartView {
    Unavailable {
        reason: Unchartable,
        message: String,
    },
    Ready(ChartBundle),
}

impl ChartView {
    fn unavailable(reason: Unchartable) -> Self {
        let message = reason.message();
        debug!(?reason, "result is not chartable");
        ChartView::Unavailable { reason, message }
    }

    pub fn bundle(&self) -> Option<&ChartBundle> {
        match self {
            ChartView::Ready(bundle) => Some(bundle),
            ChartView::Unavailable { .. } => None,
        }
    }

    pub fn unchartable(&self) -> Option<&Unchartable> {
        match self {
            ChartView::Unavailable { reason, .. } => Some(reason),
            ChartView::Ready(_) => None,
        }
    }
}
