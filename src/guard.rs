//! Reasons a result is not charted at all.
//!
//! Three states are kept apart: the result has the wrong shape, it describes
//! a schema instead of business data, or too few numeric values survive the
//! filter. Each has its own message.

use crate::table::TabularResult;
use serde::Serialize;

const COLUMN_NAME_KEYS: [&str; 4] = ["column_name", "field", "field_name", "attname"];
const DATA_TYPE_KEYS: [&str; 5] = ["data_type", "column_type", "type", "type_name", "udt_name"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unchartable {
    /// Fewer than two columns or no rows.
    NotEnoughData,
    /// The result lists columns and their types.
    SchemaMetadata,
    /// Fewer than two numeric values after filtering.
    InsufficientNumericValues { columns: Vec<String> },
}

impl Unchartable {
    pub fn message(&self) -> String {
        match self {
            Unchartable::NotEnoughData => "Not enough data to draw a chart.".to_string(),
            Unchartable::SchemaMetadata => {
                "This result describes table structure (column names and types); it cannot be charted."
                    .to_string()
            }
            Unchartable::InsufficientNumericValues { columns } => format!(
                "Cannot draw a chart because the values of {} are not numeric or there are too few of them.",
                columns.join(", ")
            ),
        }
    }
}

/// True if the result has fewer than two columns or no rows.
pub fn is_too_small(result: &TabularResult) -> bool {
    result.width() < 2 || result.height() == 0
}

/// True if the column names pair a column-name key with a data-type key.
pub fn is_schema_metadata(columns: &[String]) -> bool {
    let normalized: Vec<String> = columns.iter().map(|c| c.trim().to_lowercase()).collect();
    let has = |keys: &[&str]| normalized.iter().any(|c| keys.contains(&c.as_str()));
    has(&COLUMN_NAME_KEYS[..]) && has(&DATA_TYPE_KEYS[..])
}

/// The structural checks that do not depend on the axis selection.
///
/// Metadata tables are refused even when they have no rows.
pub fn check_structure(result: &TabularResult) -> Option<Unchartable> {
    if is_schema_metadata(&result.columns) {
        Some(Unchartable::SchemaMetadata)
    } else if is_too_small(result) {
        Some(Unchartable::NotEnoughData)
    } else {
        None
    }
}
