//! The tabular result handed to the chart pipeline by the query layer.
//!
//! A result is a flat list of column names plus a row-major matrix of cells.
//! Cells carry no type metadata beyond "number, string or null"; everything
//! else is inferred downstream by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a tabular result.
///
/// Serializes to and from a bare JSON value: `null`, a number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Number(v) => write_number(f, *v),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Writes a number the way the query layer's client stringifies it:
/// exponent notation below `1e-6` and from `1e21` up, `e+` for positive
/// exponents, no negative zero.
fn write_number(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if v == 0.0 {
        return f.write_str("0");
    }
    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", v);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        };
    }
    write!(f, "{}", v)
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Number(v as f64)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}

pub(crate) static NULL_CELL: Cell = Cell::Null;

/// Ordered column names plus positionally aligned rows.
///
/// Column names are expected to be unique and every row to have exactly
/// `columns.len()` cells. Missing cells in a ragged row read as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TabularResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { columns, rows }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the cell at `(row, col)`, or null when either index is out of range.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL_CELL)
    }

    /// Iterates over every cell of one column, in row order.
    pub fn column_cells(&self, col: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows
            .iter()
            .map(move |r| r.get(col).unwrap_or(&NULL_CELL))
    }
}
