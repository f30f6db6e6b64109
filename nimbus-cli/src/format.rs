//! Result formatting
//!
//! Turns records into positional rows aligned with a column list. A column
//! missing from a record renders as an empty cell, never as an error.

use std::collections::HashMap;

use nimbus_core::Record;
use serde_json::Value;

/// Renders one field value for display
pub type Formatter = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Per-column formatters, keyed by column name
pub type Formatters = HashMap<String, Formatter>;

/// Default rendering of a JSON value as a display string
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a list field into a sorted, comma-separated string
///
/// Non-list values fall back to [`render_value`].
pub fn format_list(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let mut items: Vec<String> = items.iter().map(render_value).collect();
            items.sort();
            items.join(", ")
        }
        other => render_value(other),
    }
}

/// Build a row from a record using the columns as exact keys
pub fn dict_properties(record: &Record, columns: &[String], formatters: &Formatters) -> Vec<String> {
    columns
        .iter()
        .map(|column| cell(record, column, column, formatters))
        .collect()
}

/// Build a row from a record using display-style columns
///
/// `"Volume ID"` reads the field `volume_id`.
pub fn item_properties(record: &Record, columns: &[String], formatters: &Formatters) -> Vec<String> {
    columns
        .iter()
        .map(|column| cell(record, column, &field_name(column), formatters))
        .collect()
}

/// Field name for a display column: lowercase with spaces as underscores
pub fn field_name(column: &str) -> String {
    column.to_lowercase().replace(' ', "_")
}

fn cell(record: &Record, column: &str, key: &str, formatters: &Formatters) -> String {
    match record.get(key) {
        Some(value) => match formatters.get(column) {
            Some(format) => format(value),
            None => render_value(value),
        },
        None => String::new(),
    }
}
