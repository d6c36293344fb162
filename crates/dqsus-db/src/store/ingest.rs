//! CSV ingestion into the staging table.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::{SinanStore, quote_ident};
use dqsus_core::STAGING_TABLE;

/// Ingestion report for one dataset file.
#[derive(Debug, Clone)]
pub struct IngestedFile {
    /// Source file.
    pub path: PathBuf,
    /// Rows inserted into staging.
    pub rows: u64,
}

impl SinanStore {
    /// Stage a batch of dataset CSVs into the `sinan` table.
    ///
    /// The staging table is created from the first file's header row, one
    /// TEXT column per header. Files whose header set matches the existing
    /// table append rows; a changed header set replaces the table first.
    /// Empty cells are stored as NULL.
    ///
    /// # Errors
    ///
    /// Fails on an empty batch, on unreadable CSV, or on a file that
    /// repeats a header name (checked before any DDL runs).
    pub async fn ingest_csv(&self, paths: &[PathBuf]) -> StoreResult<Vec<IngestedFile>> {
        if paths.is_empty() {
            return Err(StoreError::NothingToIngest);
        }
        let mut report = Vec::with_capacity(paths.len());
        for path in paths {
            report.push(self.ingest_one(path).await?);
        }
        Ok(report)
    }

    async fn ingest_one(&self, path: &Path) -> StoreResult<IngestedFile> {
        let csv_error = |source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(csv_error)?;
        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(StoreError::MissingHeader {
                path: path.to_path_buf(),
            });
        }

        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(StoreError::DuplicateColumn {
                    column: header.clone(),
                    path: path.to_path_buf(),
                });
            }
        }

        self.prepare_staging(&headers).await?;

        let insert_sql = insert_statement(&headers);
        let mut tx = self.pool.begin().await?;
        let mut rows: u64 = 0;
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            let mut query = sqlx::query(&insert_sql);
            for index in 0..headers.len() {
                let cell = record.get(index).filter(|value| !value.is_empty());
                query = query.bind(cell.map(str::to_string));
            }
            query.execute(&mut *tx).await?;
            rows += 1;
        }
        tx.commit().await?;

        info!(path = %path.display(), rows, "staged dataset file");
        Ok(IngestedFile {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// Create the staging table for this header set, or keep the existing
    /// one when the sets match.
    async fn prepare_staging(&self, headers: &[String]) -> StoreResult<()> {
        if self.table_exists(STAGING_TABLE).await? {
            let existing = self.staging_columns().await?;
            let existing_set: HashSet<&str> = existing.iter().map(String::as_str).collect();
            let incoming: HashSet<&str> = headers.iter().map(String::as_str).collect();
            if existing_set == incoming {
                return Ok(());
            }
            warn!("staging header set changed, replacing the staging table");
            let drop_sql = format!("DROP TABLE {}", quote_ident(STAGING_TABLE));
            sqlx::query(&drop_sql).execute(&self.pool).await?;
        }

        let columns = headers
            .iter()
            .map(|header| format!("{} TEXT", quote_ident(header)))
            .collect::<Vec<_>>()
            .join(", ");
        let create_sql = format!("CREATE TABLE {} ({columns})", quote_ident(STAGING_TABLE));
        sqlx::query(&create_sql).execute(&self.pool).await?;
        Ok(())
    }
}

fn insert_statement(headers: &[String]) -> String {
    let columns = headers
        .iter()
        .map(|header| quote_ident(header))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; headers.len()].join(", ");
    format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders})",
        quote_ident(STAGING_TABLE)
    )
}
