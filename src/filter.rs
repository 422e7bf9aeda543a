//! Category filtering over the X column.

use crate::table::{Cell, TabularResult, NULL_CELL};
use indexmap::IndexSet;
use serde::Serialize;

/// Label used for a null X cell, both as axis label and as category.
pub const NO_VALUE_LABEL: &str = "(no value)";

/// Stringifies an X cell for use as a label or category.
pub fn label_for(cell: &Cell) -> String {
    match cell {
        Cell::Null => NO_VALUE_LABEL.to_string(),
        other => other.to_string(),
    }
}

/// Distinct labels of column `x_idx` over all rows, in first-occurrence order.
pub fn distinct_categories(result: &TabularResult, x_idx: usize) -> IndexSet<String> {
    result.column_cells(x_idx).map(label_for).collect()
}

/// The user-controlled subset of X categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryFilter {
    options: IndexSet<String>,
    selected: IndexSet<String>,
    touched: bool,
}

impl CategoryFilter {
    /// Selects every distinct category of the X column.
    pub fn all(result: &TabularResult, x_idx: usize) -> Self {
        let options = distinct_categories(result, x_idx);
        Self {
            selected: options.clone(),
            options,
            touched: false,
        }
    }

    /// Restricts the selection to `categories`.
    ///
    /// Unknown categories are ignored and the selection keeps the option
    /// order, not the order given.
    pub fn with_selection<I, S>(&self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: IndexSet<String> = categories
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        let selected = self
            .options
            .iter()
            .filter(|c| wanted.contains(*c))
            .cloned()
            .collect();
        Self {
            options: self.options.clone(),
            selected,
            touched: true,
        }
    }

    pub fn options(&self) -> &IndexSet<String> {
        &self.options
    }

    pub fn selected(&self) -> &IndexSet<String> {
        &self.selected
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn contains(&self, label: &str) -> bool {
        self.selected.contains(label)
    }
}

/// The rows that pass the category filter, viewed through the current axes.
///
/// This is the common input of the advisor, the gate and the series builder.
#[derive(Debug, Clone)]
pub struct FilteredRows<'a> {
    result: &'a TabularResult,
    rows: Vec<usize>,
    x_idx: usize,
    y_idxs: Vec<usize>,
}

impl<'a> FilteredRows<'a> {
    pub fn new(
        result: &'a TabularResult,
        filter: &CategoryFilter,
        x_idx: usize,
        y_idxs: Vec<usize>,
    ) -> Self {
        let rows = (0..result.height())
            .filter(|&r| filter.contains(&label_for(result.cell(r, x_idx))))
            .collect();
        Self {
            result,
            rows,
            x_idx,
            y_idxs,
        }
    }

    /// A view over every row, with no category filtering.
    pub fn unfiltered(result: &'a TabularResult, x_idx: usize, y_idxs: Vec<usize>) -> Self {
        Self {
            result,
            rows: (0..result.height()).collect(),
            x_idx,
            y_idxs,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn y_count(&self) -> usize {
        self.y_idxs.len()
    }

    pub fn x_name(&self) -> &str {
        self.result
            .columns
            .get(self.x_idx)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn y_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.y_idxs.iter().map(|&i| {
            self.result
                .columns
                .get(i)
                .map(String::as_str)
                .unwrap_or_default()
        })
    }

    pub fn x_cells(&self) -> impl Iterator<Item = &'a Cell> + '_ {
        let result = self.result;
        let x_idx = self.x_idx;
        self.rows.iter().map(move |&r| result.cell(r, x_idx))
    }

    /// Cells of the `series`-th Y column, aligned with `x_cells`.
    pub fn y_cells(&self, series: usize) -> impl Iterator<Item = &'a Cell> + '_ {
        let result = self.result;
        let y_idx = self.y_idxs.get(series).copied();
        self.rows.iter().map(move |&r| match y_idx {
            Some(c) => result.cell(r, c),
            None => &NULL_CELL,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.x_cells().map(label_for)
    }

    pub fn distinct_label_count(&self) -> usize {
        self.labels().collect::<IndexSet<_>>().len()
    }

    /// The X cell and first Y cell of the first filtered row.
    pub fn first_pair(&self) -> Option<(&'a Cell, &'a Cell)> {
        let x = self.x_cells().next()?;
        let y = self.y_cells(0).next()?;
        Some((x, y))
    }
}
