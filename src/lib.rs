//! The main library for the `autochart` application.
//!
//! This crate turns untyped tabular query results into chart suggestions and
//! renderer-ready chart data. Given a result of unknown shape it decides
//! whether it is chart-worthy, which columns serve as category and series,
//! which chart type fits best, and how to turn raw cells into numeric series,
//! while staying stable under manual overrides.
//!
//! The library is structured into several modules:
//! - `table`: The tabular result and its cells.
//! - `classify`: Numeric and date-like checks for single cells.
//! - `profile`: Column profiles and default axes.
//! - `filter`: Category filtering of the X column.
//! - `advisor`: Chart-type suggestion.
//! - `gate`: Which chart types are legal for the current axes.
//! - `series`: Label, series, pie and scatter data for renderers.
//! - `guard`: The reasons a result is not charted.
//! - `session`: The immutable chart state and the renderer bundle.
//! - `cli`, `data_loader`, `processing`, `plotter`: The command-line front end.
//! - `error`, `telemetry`: Error types and tracing setup.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub mod advisor;
pub mod classify;
pub mod cli;
pub mod data_loader;
pub mod error;
pub mod filter;
pub mod gate;
pub mod guard;
pub mod plotter;
pub mod processing;
pub mod profile;
pub mod series;
pub mod session;
pub mod table;
pub mod telemetry;

pub use advisor::{ChartType, Suggestion};
pub use session::{ChartBundle, ChartSession, ChartView};
pub use table::{Cell, TabularResult};

use crate::cli::Cli;
use crate::data_loader::SUPPORTED_EXTENSIONS;
use crate::error::AppError;

/// The main entry point for the application logic.
///
/// This function orchestrates the entire process:
/// 1.  It finds all supported files based on the input path (which can be a file or directory).
/// 2.  It iterates through each file, calling `process_single_file` to build and write the chart.
/// 3.  It logs progress and completion messages.
///
/// # Errors
///
/// Returns an error if file discovery or processing fails for any of the files.
pub fn run(cli: &Cli) -> Result<()> {
    let files_to_process = find_supported_files(&cli.input_path)?;
    if files_to_process.is_empty() {
        warn!("No supported files found in the specified path.");
        return Ok(());
    }

    info!("Found {} files to process...", files_to_process.len());

    for file_path in files_to_process {
        info!("Processing '{}'...", file_path.display());
        process_single_file(&file_path, cli)
            .with_context(|| format!("Failed to process file: {}", file_path.display()))?;
    }

    info!("Done.");
    Ok(())
}

/// Orchestrates loading, chart selection and output for a single file.
///
/// # Errors
///
/// Returns an error if any step (loading, selection, rendering, or saving) fails.
fn process_single_file(file_path: &Path, cli: &Cli) -> Result<()> {
    let result = data_loader::load_tabular_result(file_path)?;

    let plot_data = processing::prepare_plot_data(result, cli, file_path)?;
    if let Some(reason) = plot_data.view.unchartable() {
        warn!("  -> Not charted: {}", reason.message());
    }

    let content = if cli.json {
        serde_json::to_string_pretty(&plot_data.view)?
    } else {
        plotter::generate_html_plot(&plot_data)?
    };

    let output_path = generate_output_path(file_path, cli);
    fs::create_dir_all(output_path.parent().unwrap_or(Path::new(".")))?;
    fs::write(&output_path, content)
        .with_context(|| format!("Failed to write output to {}", output_path.display()))?;

    info!("  -> Chart saved to '{}'", output_path.display());

    Ok(())
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Finds all supported files based on a given path.
///
/// If the path is a file, it checks if its extension is supported.
/// If the path is a directory, it recursively walks the directory and collects all
/// files with supported extensions. Previously written `.chart.json` outputs are skipped.
///
/// # Errors
///
/// Returns `AppError::InvalidInputPath` if the path doesn't exist.
pub fn find_supported_files(path: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();

    if path.is_file() {
        if has_supported_extension(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let entry_path = entry.path();
            if entry.file_type().is_file()
                && has_supported_extension(entry_path)
                && !is_generated_output(entry_path)
            {
                files.push(entry_path.to_path_buf());
            }
        }
    } else {
        return Err(AppError::InvalidInputPath(path.to_path_buf()));
    }
    Ok(files)
}

fn is_generated_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".chart.json"))
}

/// Determines the output path for a generated chart.
///
/// The file is named `<input_stem>.html`, or `<input_stem>.chart.json` with
/// `--json`. It is written inside the output directory if one is given,
/// otherwise next to the input file.
pub fn generate_output_path(input_path: &Path, cli: &Cli) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default().to_string_lossy();
    let extension = if cli.json { "chart.json" } else { "html" };
    let default_output_name = format!("{}.{}", stem, extension);

    if let Some(output_dir) = &cli.output_dir {
        output_dir.join(default_output_name)
    } else {
        input_path.with_file_name(default_output_name)
    }
}
