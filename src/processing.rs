//! This module applies the command-line selections to a loaded result.
//!
//! It starts a chart session with the profiler's defaults, then replays the
//! flags as user actions in the same order an interactive user would apply
//! them: X column, series, categories, chart type. Absent flags keep the
//! defaults.

use crate::cli::Cli;
use crate::error::AppError;
use crate::session::{ChartSession, ChartView};
use crate::table::TabularResult;
use std::path::Path;
use tracing::{debug, info};

/// A container for all the data and configuration needed to render a chart.
///
/// This struct is the output of the `prepare_plot_data` function and serves as the
/// input for the `plotter` module.
pub struct PlotData {
    /// The title of the page.
    pub title: String,
    /// The chart bundle, or the reason no chart can be drawn.
    pub view: ChartView,
    /// Whether to enable ECharts animations.
    pub animations: bool,
}

/// Builds the chart session for a result and packages its view for rendering.
///
/// # Arguments
///
/// * `result` - The tabular result loaded from a file.
/// * `cli` - A reference to the parsed command-line arguments (`Cli` struct).
/// * `file_path` - The path of the input file, used as a fallback title.
///
/// # Errors
///
/// Returns an `AppError::Selection` if a requested column does not exist or
/// cannot be used as a series.
pub fn prepare_plot_data(
    result: TabularResult,
    cli: &Cli,
    file_path: &Path,
) -> Result<PlotData, AppError> {
    let session = apply_selections(ChartSession::new(result), cli)?;

    if let Some(axes) = session.axes() {
        debug!(
            x = %axes.x_column,
            y = ?axes.y_columns,
            suggested = %session.suggestion().chart_type,
            effective = %session.effective_chart_type(),
            "resolved chart selection"
        );
    }
    if let Some(requested) = cli.chart_type {
        if session.effective_chart_type() != requested {
            info!(
                %requested,
                used = %session.effective_chart_type(),
                "requested chart type is not available for this data"
            );
        }
    }

    let view = session.view();
    let title = cli.title.clone().unwrap_or_else(|| match view.bundle() {
        Some(bundle) => bundle.title.clone(),
        None => file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string(),
    });

    Ok(PlotData {
        title,
        view,
        animations: cli.animations,
    })
}

/// Replays the CLI selections on a session.
///
/// The order matters: changing X resets the category filter, so categories
/// are applied after it, and the chart type last so the gate sees the final
/// axes.
pub fn apply_selections(session: ChartSession, cli: &Cli) -> Result<ChartSession, AppError> {
    let mut session = session.with_data_labels(cli.data_labels);

    // Results with fewer than two columns have no axes; leave them to the view.
    if session.axes().is_none() {
        return Ok(session);
    }

    if let Some(x) = &cli.x {
        session = session.with_x_column(x)?;
    }
    if let Some(y) = &cli.y {
        session = session.with_y_columns(y)?;
    }
    if let Some(categories) = &cli.categories {
        session = session.with_categories(categories)?;
    }
    if cli.chart_type.is_some() {
        session = session.with_chart_type(cli.chart_type);
    }
    Ok(session)
}
