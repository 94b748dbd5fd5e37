//! Untyped column values, the currency of `fetch_data`/`execute_query`

use std::fmt;

use serde::Serialize;

use crate::error::{DataError, Result};

/// A single column value, either bound as a parameter or read from a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

/// One result row: column values in SELECT order.
pub type Row = Vec<SqlValue>;

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Floats, with integers widened (SQLite hands back whole amounts either way).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(""),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:.2}", v),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Positional access into a row, reporting the column name on mismatch.
pub(crate) struct Columns<'a> {
    row: &'a [SqlValue],
    names: &'static [&'static str],
}

impl<'a> Columns<'a> {
    pub(crate) fn new(row: &'a [SqlValue], names: &'static [&'static str]) -> Self {
        Self { row, names }
    }

    fn get(&self, idx: usize) -> (&'a SqlValue, &'static str) {
        let name = self.names.get(idx).copied().unwrap_or("?");
        (self.row.get(idx).unwrap_or(&SqlValue::Null), name)
    }

    pub(crate) fn int(&self, idx: usize) -> Result<i64> {
        let (value, name) = self.get(idx);
        value.as_i64().ok_or_else(|| DataError::decode(name, "integer"))
    }

    pub(crate) fn float(&self, idx: usize) -> Result<f64> {
        let (value, name) = self.get(idx);
        value.as_f64().ok_or_else(|| DataError::decode(name, "number"))
    }

    pub(crate) fn text(&self, idx: usize) -> Result<&'a str> {
        let (value, name) = self.get(idx);
        value.as_str().ok_or_else(|| DataError::decode(name, "text"))
    }

    /// Text column where NULL reads as an empty string.
    pub(crate) fn text_or_empty(&self, idx: usize) -> Result<&'a str> {
        let (value, _) = self.get(idx);
        if value.is_null() {
            return Ok("");
        }
        self.text(idx)
    }

    pub(crate) fn parsed<T: std::str::FromStr>(&self, idx: usize, expected: &'static str) -> Result<T> {
        let (_, name) = self.get(idx);
        self.text(idx)?
            .parse()
            .map_err(|_| DataError::decode(name, expected))
    }
}
