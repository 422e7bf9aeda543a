use crate::advisor::ChartType;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Suggests and renders the best-fitting chart for tabular query results."
)]
pub struct Cli {
    /// The input file or folder to scan for tabular results.
    #[arg(required = true)]
    pub input_path: PathBuf,

    /// Directory to save the generated files.
    /// Defaults to saving next to each input file.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Name of the column to use as the category (X) axis.
    /// Defaults to the first text or date-like column.
    #[arg(short, long)]
    pub x: Option<String>,

    /// Comma-separated list of numeric columns to plot as series (Y-axis).
    /// Defaults to the first numeric column other than the X column.
    #[arg(short, long, value_delimiter = ',')]
    pub y: Option<Vec<String>>,

    /// Chart type to use instead of the suggested one.
    /// Ignored when it is not available for the selected axes.
    #[arg(short = 't', long, value_enum)]
    pub chart_type: Option<ChartType>,

    /// Comma-separated list of X categories to keep.
    /// Defaults to every category.
    #[arg(long, value_delimiter = ',')]
    pub categories: Option<Vec<String>>,

    /// A custom title for the chart.
    /// Defaults to "<series> by <category>".
    #[arg(long)]
    pub title: Option<String>,

    /// Show value labels on the chart.
    #[arg(long, default_value_t = false)]
    pub data_labels: bool,

    /// Enable ECharts animations
    #[arg(long, default_value_t = false)]
    pub animations: bool,

    /// Write the renderer bundle as JSON instead of an HTML page.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print debug info about profiling and chart decisions
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
