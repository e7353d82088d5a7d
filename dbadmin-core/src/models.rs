//! Data models passed between adapters, the execution collaborator and the UI.
//!
//! `QueryResult` is produced entirely by the execution collaborator; adapters
//! hand it back to callers untouched.

use serde::{Deserialize, Serialize};

/// Supported database engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DatabaseType {
    Oracle,
}

impl DatabaseType {
    /// Lower-case tag used by the UI and in URLs (`oracle://`).
    pub fn tag(self) -> &'static str {
        match self {
            DatabaseType::Oracle => "oracle",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseType::Oracle => write!(f, "Oracle"),
        }
    }
}

/// Column metadata reported by the execution collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column label as returned by the engine (aliases included)
    pub name: String,
    /// Native type name, when the driver reports one
    pub type_name: Option<String>,
}

impl ColumnMeta {
    /// Creates column metadata without a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
        }
    }

    /// Builder method to set the native type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// Tabular result: ordered columns and ordered rows of cell values.
///
/// Each row is an ordered mapping from column label to value; labels live in
/// `columns` once instead of being repeated per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    /// Creates an empty result with the given column labels.
    pub fn with_columns<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: labels.into_iter().map(ColumnMeta::new).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Cells are matched to columns by position.
    pub fn push_row(&mut self, row: Vec<serde_json::Value>) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the result has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrowed view of row `index`.
    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        self.rows.get(index).map(|values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Iterates rows in order.
    pub fn iter(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(|values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Converts rows into JSON objects keyed by column label.
    pub fn to_json_rows(&self) -> Vec<serde_json::Value> {
        self.iter().map(|row| row.to_json()).collect()
    }
}

/// One row of a [`QueryResult`] with label lookup.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    columns: &'a [ColumnMeta],
    values: &'a [serde_json::Value],
}

impl<'a> RowRef<'a> {
    /// Value of the column labelled `label`.
    pub fn get(&self, label: &str) -> Option<&'a serde_json::Value> {
        self.columns
            .iter()
            .position(|column| column.name == label)
            .and_then(|index| self.values.get(index))
    }

    /// Value of `label` as a string slice, if it is a JSON string.
    pub fn get_str(&self, label: &str) -> Option<&'a str> {
        self.get(label).and_then(serde_json::Value::as_str)
    }

    /// Cell values in column order.
    pub fn values(&self) -> &'a [serde_json::Value] {
        self.values
    }

    fn to_json(self) -> serde_json::Value {
        let map = self
            .columns
            .iter()
            .zip(self.values.iter())
            .map(|(column, value)| (column.name.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

/// Row cap for bounded fetches.
///
/// The UI encodes "no limit" as `-1`; [`RowLimit::from_count`] maps that
/// sentinel to `Unlimited` and keeps every other count as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLimit {
    #[default]
    Unlimited,
    Rows(i64),
}

impl RowLimit {
    /// Sentinel used by callers for "no limit".
    pub const NO_LIMIT: i64 = -1;

    /// Interprets a caller-supplied count.
    pub fn from_count(count: i64) -> Self {
        if count == Self::NO_LIMIT {
            RowLimit::Unlimited
        } else {
            RowLimit::Rows(count)
        }
    }
}

impl From<i64> for RowLimit {
    fn from(count: i64) -> Self {
        RowLimit::from_count(count)
    }
}

/// Location of a syntax error inside a submitted statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPosition {
    /// Line number reported by the engine (1-based)
    pub row: u32,
    /// Caret offset within the statement text of that line
    pub col: u32,
}
