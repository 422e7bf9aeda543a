//! Per-cell classification.
//!
//! Query results carry no column types, so every decision about axes and
//! chart types is built on top of these narrow, total checks. Numeric strings
//! may use a comma as decimal separator; every comma is read as a decimal
//! point, so thousands separators are not supported. Date detection is
//! syntactic only and does not validate the calendar.

use crate::table::Cell;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_PREFIX_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Year-month prefix only, so month keys like "2024-01" read as dates.
        // This also accepts strings such as "1234-56 Main St".
        Regex::new(r"^\d{4}-\d{2}").expect("Invalid regex: YYYY-MM"),
        Regex::new(r"^\d{2}/\d{2}/\d{4}").expect("Invalid regex: DD/MM/YYYY"),
    ]
});

/// What a single cell looks like to the chart pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellKind {
    Numeric(f64),
    DateLike,
    Text,
    Null,
}

/// Classifies a cell. Numeric wins over date-like.
pub fn classify(cell: &Cell) -> CellKind {
    if let Some(v) = to_numeric_or_null(cell) {
        return CellKind::Numeric(v);
    }
    match cell {
        Cell::Null => CellKind::Null,
        _ if is_date_like_cell(cell) => CellKind::DateLike,
        _ => CellKind::Text,
    }
}

/// Parses a possibly comma-decimal numeric string.
///
/// Every `,` becomes `.` before parsing, so `"1,5"` is 1.5 and `"1.234,56"`
/// is rejected. Blank strings and non-finite results are rejected.
pub fn parse_locale_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn to_numeric_or_null(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(v) if v.is_finite() => Some(*v),
        Cell::Text(s) => parse_locale_number(s),
        _ => None,
    }
}

pub fn is_numeric_cell(cell: &Cell) -> bool {
    to_numeric_or_null(cell).is_some()
}

/// True if the string starts with `YYYY-MM` or `DD/MM/YYYY`.
pub fn is_date_like(s: &str) -> bool {
    DATE_PREFIX_PATTERNS.iter().any(|re| re.is_match(s))
}

pub fn is_date_like_cell(cell: &Cell) -> bool {
    match cell {
        Cell::Text(s) => is_date_like(s),
        other => is_date_like(&other.to_string()),
    }
}
