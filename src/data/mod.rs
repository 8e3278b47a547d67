//! Dataset loading and the in-memory spend table.

pub mod loader;

use chrono::NaiveDate;

/// One source row after column renaming and type coercion.
///
/// Numeric fields are zero-filled coercions; they only carry meaning when the
/// corresponding column exists in the [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub date: Option<NaiveDate>,
    pub advertiser: Option<String>,
    pub spend: f64,
    pub orders: i64,
    pub customers: i64,
}

/// The advertiser spend table, immutable once loaded.
///
/// Loaded once at startup and shared read-only across request handlers; no
/// handler ever mutates it.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// Normalized column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}
