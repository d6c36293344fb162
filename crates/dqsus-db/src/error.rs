//! Store error types.

use std::path::PathBuf;

use dqsus_core::{MappingError, TabularError};
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by the embedded store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected a query or connection.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A dataset file could not be read as CSV.
    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A dataset file repeats a header name.
    #[error("duplicate column '{column}' in {}", path.display())]
    DuplicateColumn { column: String, path: PathBuf },

    /// A dataset file has no header row.
    #[error("{} has no header row", path.display())]
    MissingHeader { path: PathBuf },

    /// `ingest_csv` was called with no files.
    #[error("no dataset files to ingest")]
    NothingToIngest,

    /// A queried table does not exist.
    #[error("table '{name}' does not exist")]
    TableMissing { name: String },

    /// A bundled column mapping failed to load.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Loaded rows were structurally inconsistent.
    #[error(transparent)]
    Tabular(#[from] TabularError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_column_message_names_file_and_column() {
        let error = StoreError::DuplicateColumn {
            column: "NU_NOTIFIC".to_string(),
            path: PathBuf::from("/data/raw/DENG/DENGBR23.csv"),
        };
        assert_eq!(
            error.to_string(),
            "duplicate column 'NU_NOTIFIC' in /data/raw/DENG/DENGBR23.csv"
        );
    }

    #[test]
    fn table_missing_message_names_table() {
        let error = StoreError::TableMissing {
            name: "exams".to_string(),
        };
        assert_eq!(error.to_string(), "table 'exams' does not exist");
    }
}
