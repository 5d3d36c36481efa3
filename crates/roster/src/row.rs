//! String-valued tabular rows
//!
//! Rows mirror one line of a roster sheet. Column names are normalized on
//! the way in so `"Pilot ID"`, `"pilot_id "` and `"PILOT_ID"` all address
//! the same cell.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Normalize a column name: trim, lowercase, whitespace runs to `_`.
pub fn normalize_column(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// One roster row keyed by normalized column name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, String>")]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    /// Empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Insert or replace a cell under the normalized column name.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.cells.insert(normalize_column(column), value.into());
    }

    /// Cell value by column name, normalized before lookup
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(&normalize_column(column)).map(String::as_str)
    }

    /// Cell value, or `default` when the column is absent.
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }

    /// True when every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }

    /// Normalized column names, sorted
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

/// Spreadsheet exports carry numbers and booleans as JSON scalars.
fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

impl From<BTreeMap<String, Value>> for Row {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut row = Row::new();
        for (column, value) in raw {
            row.set(&column, cell_text(value));
        }
        row
    }
}

impl From<Row> for BTreeMap<String, String> {
    fn from(row: Row) -> Self {
        row.cells
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Row {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.set(column, value);
        }
        row
    }
}
