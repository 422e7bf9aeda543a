//! Column profiling and default axis selection.
//!
//! Profiles are computed from the unfiltered rows so that axis menus do not
//! change while the user narrows the category filter.

use crate::classify::{classify, is_numeric_cell, CellKind};
use crate::table::{Cell, TabularResult};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// At least one cell is numeric-classifiable.
    pub is_numeric: bool,
    /// Every cell is a string or date-like.
    pub is_categorical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProfile {
    pub columns: Vec<ColumnProfile>,
    pub default_x: Option<String>,
    pub default_y_columns: Vec<String>,
}

impl TableProfile {
    pub fn numeric_columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns
            .iter()
            .filter(|c| c.is_numeric)
            .map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.column(name).is_some_and(|c| c.is_numeric)
    }

    /// Default Y columns for a given X column.
    ///
    /// Prefers the first numeric column that is not the X column, then the
    /// X column itself if it is the only numeric one, then the second
    /// declared column.
    pub fn default_y_for(&self, x_column: &str) -> Vec<String> {
        if let Some(y) = self.numeric_columns().find(|c| *c != x_column) {
            return vec![y.to_string()];
        }
        if let Some(y) = self.numeric_columns().next() {
            return vec![y.to_string()];
        }
        self.columns
            .get(1)
            .map(|c| vec![c.name.clone()])
            .unwrap_or_default()
    }
}

fn is_categorical_cell(cell: &Cell) -> bool {
    match classify(cell) {
        CellKind::Text | CellKind::DateLike => true,
        // Numeric strings such as "42" still arrived as text.
        CellKind::Numeric(_) => cell.is_text(),
        CellKind::Null => false,
    }
}

/// Profiles every column of `result` and derives the default axes.
pub fn profile_columns(result: &TabularResult) -> TableProfile {
    let columns: Vec<ColumnProfile> = result
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| ColumnProfile {
            name: name.clone(),
            is_numeric: result.column_cells(idx).any(is_numeric_cell),
            is_categorical: result.column_cells(idx).all(is_categorical_cell),
        })
        .collect();

    let default_x = columns
        .iter()
        .find(|c| c.is_categorical)
        .or_else(|| columns.first())
        .map(|c| c.name.clone());

    let mut profile = TableProfile {
        columns,
        default_x,
        default_y_columns: Vec::new(),
    };
    if let Some(x) = profile.default_x.clone() {
        profile.default_y_columns = profile.default_y_for(&x);
    }

    debug!(
        columns = profile.columns.len(),
        numeric = profile.numeric_columns().count(),
        default_x = ?profile.default_x,
        default_y = ?profile.default_y_columns,
        "profiled tabular result"
    );
    profile
}
