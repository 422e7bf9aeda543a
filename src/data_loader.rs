use crate::error::AppError;
use crate::table::{Cell, TabularResult};
use polars::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Extensions `load_tabular_result` knows how to read.
pub const SUPPORTED_EXTENSIONS: [&str; 7] =
    ["json", "jsonl", "ndjson", "csv", "parquet", "xlsx", "xls"];

/// Loads a supported file into a `TabularResult`.
///
/// `.json` files hold a serialized result (`{"columns": [...], "rows": [...]}`),
/// the shape produced by the query service. Other formats are read as tables
/// and converted cell by cell.
pub fn load_tabular_result(path: &Path) -> Result<TabularResult, AppError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let result: TabularResult = match extension.as_str() {
        "json" => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        "csv" => dataframe_to_tabular(&CsvReader::new(File::open(path)?).finish()?)?,
        "parquet" => dataframe_to_tabular(&ParquetReader::new(File::open(path)?).finish()?)?,
        "jsonl" | "ndjson" => {
            let df = JsonReader::new(File::open(path)?)
                .with_json_format(JsonFormat::JsonLines)
                .finish()?;
            dataframe_to_tabular(&df)?
        }
        "xlsx" | "xls" => load_excel(path)?,
        _ => {
            return Err(AppError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            ))
        }
    };

    debug!(
        path = %path.display(),
        columns = result.width(),
        rows = result.height(),
        "loaded tabular result"
    );
    Ok(result)
}

/// Converts a DataFrame into untyped cells.
///
/// Numeric dtypes become numbers, strings stay strings, and every other
/// dtype (dates, datetimes, booleans) becomes its display text.
pub fn dataframe_to_tabular(df: &DataFrame) -> Result<TabularResult, AppError> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    let mut rows: Vec<Vec<Cell>> = vec![Vec::with_capacity(columns.len()); df.height()];

    for series in df.get_columns() {
        let series = series.rechunk();
        let numeric = series.dtype().is_numeric();
        for (row, av) in rows.iter_mut().zip(series.iter()) {
            row.push(any_value_to_cell(&av, numeric));
        }
    }

    Ok(TabularResult::new(columns, rows))
}

fn any_value_to_cell(av: &AnyValue, numeric: bool) -> Cell {
    if av.is_null() {
        return Cell::Null;
    }
    if let Some(s) = av.get_str() {
        return Cell::Text(s.to_string());
    }
    if numeric {
        if let Some(v) = av.extract::<f64>() {
            return Cell::Number(v);
        }
    }
    Cell::Text(av.to_string())
}

/// Loads the first worksheet of an Excel file.
fn load_excel(path: &Path) -> Result<TabularResult, AppError> {
    use calamine::{open_workbook_auto, Data, Reader};

    let unsupported = || AppError::UnsupportedFormat(path.to_string_lossy().to_string());

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(unsupported)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let rows: Vec<&[Data]> = range.rows().collect();
    sheet_rows_to_tabular(&rows).ok_or_else(unsupported)
}

/// Turns worksheet rows into a result.
///
/// The first non-empty row is the header; blank header cells are named
/// `col_<n>`. Returns `None` for a sheet with no non-empty row.
fn sheet_rows_to_tabular(rows: &[&[calamine::Data]]) -> Option<TabularResult> {
    use calamine::Data;

    let header_idx = rows
        .iter()
        .position(|r| r.iter().any(|c| !matches!(c, Data::Empty)))?;
    let col_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);

    let columns = (0..col_count)
        .map(|i| {
            let name = rows[header_idx]
                .get(i)
                .map(|c| c.to_string().trim().to_string())
                .unwrap_or_default();
            if name.is_empty() {
                format!("col_{}", i + 1)
            } else {
                name
            }
        })
        .collect();

    let body = rows[header_idx + 1..]
        .iter()
        .map(|r| {
            (0..col_count)
                .map(|i| r.get(i).map_or(Cell::Null, excel_cell))
                .collect()
        })
        .collect();

    Some(TabularResult::new(columns, body))
}

fn excel_cell(cell: &calamine::Data) -> Cell {
    use calamine::Data;
    use chrono::Timelike;

    match cell {
        Data::Empty | Data::Error(_) => Cell::Null,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.num_seconds_from_midnight() == 0 => {
                Cell::Text(ndt.format("%Y-%m-%d").to_string())
            }
            Some(ndt) => Cell::Text(ndt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
