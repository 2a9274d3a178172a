//! Result rows handed from executors to hydrators.

use serde_json::{Value, json};
use std::collections::HashMap;

use crate::error::AppError;

/// One result row as a column alias to value mapping.
///
/// SQL NULL is stored as [`Value::Null`]. Accessors come in two flavours:
/// `require_*` fails with [`AppError::Hydration`] when the column is absent
/// or NULL, `opt_*` returns `None` in both cases. Both fail when a present
/// value has the wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Builder form of [`Row::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the value unless the column is absent or NULL.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column).filter(|v| !v.is_null())
    }

    pub fn opt_i64(&self, column: &str) -> Result<Option<i64>, AppError> {
        self.get(column)
            .map(|v| v.as_i64().ok_or_else(|| type_mismatch(column, "integer", v)))
            .transpose()
    }

    pub fn require_i64(&self, column: &str) -> Result<i64, AppError> {
        self.opt_i64(column)?.ok_or_else(|| missing(column))
    }

    pub fn opt_f64(&self, column: &str) -> Result<Option<f64>, AppError> {
        self.get(column)
            .map(|v| v.as_f64().ok_or_else(|| type_mismatch(column, "number", v)))
            .transpose()
    }

    pub fn require_f64(&self, column: &str) -> Result<f64, AppError> {
        self.opt_f64(column)?.ok_or_else(|| missing(column))
    }

    pub fn opt_str(&self, column: &str) -> Result<Option<&str>, AppError> {
        self.get(column)
            .map(|v| v.as_str().ok_or_else(|| type_mismatch(column, "string", v)))
            .transpose()
    }

    pub fn require_str(&self, column: &str) -> Result<&str, AppError> {
        self.opt_str(column)?.ok_or_else(|| missing(column))
    }

    /// Iterates columns whose alias starts with `prefix`, yielding the alias
    /// with the prefix stripped. NULL values are included.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.columns
            .iter()
            .filter_map(move |(k, v)| k.strip_prefix(prefix).map(|name| (name, v)))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

fn missing(column: &str) -> AppError {
    AppError::hydration("Required column is missing or NULL", json!({ "column": column }))
}

fn type_mismatch(column: &str, expected: &str, found: &Value) -> AppError {
    AppError::hydration(
        "Column has an unexpected type",
        json!({ "column": column, "expected": expected, "found": found }),
    )
}
