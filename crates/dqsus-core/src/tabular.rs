//! In-memory tabular data and the null-dropping cleanup step.

use thiserror::Error;
use tracing::warn;

/// Convenience alias for tabular results.
pub type TabularResult<T> = Result<T, TabularError>;

/// Errors raised while assembling tabular data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabularError {
    /// A row's width does not match the header row.
    #[error("row {row} has {found} values but the table has {expected} columns")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of values found in the row.
        found: usize,
    },
}

/// What a cleanup pass removed from a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Names of columns dropped because every value was null.
    pub dropped_columns: Vec<String>,
    /// Number of rows dropped because at least one value was null.
    pub dropped_rows: usize,
}

/// A table held in memory: ordered headers plus rows of nullable cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl TableData {
    /// Build a table, checking that every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> TabularResult<Self> {
        let expected = headers.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TabularError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Column headers in order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Drop columns whose every value is null, returning the dropped names.
    ///
    /// A table with no rows keeps all of its columns.
    pub fn drop_empty_columns(&mut self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let keep: Vec<bool> = (0..self.headers.len())
            .map(|column| self.rows.iter().any(|row| row[column].is_some()))
            .collect();
        if keep.iter().all(|keep| *keep) {
            return Vec::new();
        }

        let mut dropped = Vec::new();
        let mut keep_flags = keep.iter().copied();
        self.headers.retain(|header| {
            let keep = keep_flags.next().unwrap_or(true);
            if !keep {
                dropped.push(header.clone());
            }
            keep
        });
        for row in &mut self.rows {
            let mut keep_flags = keep.iter().copied();
            row.retain(|_| keep_flags.next().unwrap_or(true));
        }
        dropped
    }

    /// Drop rows that still contain any null value, returning how many went.
    pub fn drop_rows_with_missing(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.iter().all(Option::is_some));
        before - self.rows.len()
    }

    /// Run the standard cleanup: all-null columns first, then rows with
    /// remaining nulls. Warns under `name` when a stage empties the table.
    pub fn cleanup(&mut self, name: &str) -> CleanupSummary {
        let dropped_columns = self.drop_empty_columns();
        if self.is_empty() {
            warn!(table = name, "table is empty after removing null columns");
        }
        let dropped_rows = self.drop_rows_with_missing();
        if self.is_empty() && dropped_rows > 0 {
            warn!(table = name, "table is empty after removing null values");
        }
        CleanupSummary {
            dropped_columns,
            dropped_rows,
        }
    }
}
