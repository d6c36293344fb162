//! Row loading and the post-load NULL cleanup.

use sqlx::Row;

use crate::error::StoreResult;
use crate::store::{SinanStore, quote_ident};
use dqsus_core::{CleanupSummary, TableData};

impl SinanStore {
    /// Load up to `limit` rows of a table, preserving column order.
    ///
    /// A limit of 0 loads everything.
    pub async fn load(&self, table: &str, limit: u64) -> StoreResult<TableData> {
        let columns = self.columns_of(table).await?;
        let select = columns
            .iter()
            .map(|column| quote_ident(column))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = if limit == 0 {
            format!("SELECT {select} FROM {}", quote_ident(table))
        } else {
            format!("SELECT {select} FROM {} LIMIT {limit}", quote_ident(table))
        };

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let mut data = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut cells = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                cells.push(row.try_get::<Option<String>, _>(index)?);
            }
            data.push(cells);
        }

        Ok(TableData::new(columns, data)?)
    }

    /// Load a table and apply the NULL cleanup: all-NULL columns are
    /// dropped first, then rows still carrying NULLs.
    pub async fn clean_load(
        &self,
        table: &str,
        limit: u64,
    ) -> StoreResult<(TableData, CleanupSummary)> {
        let mut data = self.load(table, limit).await?;
        let summary = data.cleanup(table);
        Ok((data, summary))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::StoreError;
    use crate::setup::setup_test_database;

    async fn staged_store(dir: &TempDir, content: &str) -> SinanStore {
        let path = dir.path().join("DENGBR23.csv");
        fs::write(&path, content).unwrap();
        let store = SinanStore::new(setup_test_database().await.unwrap());
        store.ingest_csv(&[path]).await.unwrap();
        store
    }

    #[tokio::test]
    async fn load_respects_limit_and_order() {
        let dir = TempDir::new().unwrap();
        let store = staged_store(&dir, "NU_NOTIFIC,CS_SEXO\n1,F\n2,M\n3,F\n").await;

        let limited = store.load("sinan", 2).await.unwrap();
        assert_eq!(limited.rows().len(), 2);
        assert_eq!(limited.headers(), &["NU_NOTIFIC", "CS_SEXO"]);

        let full = store.load("sinan", 0).await.unwrap();
        assert_eq!(full.rows().len(), 3);
        assert_eq!(full.rows()[0][0], Some("1".to_string()));
    }

    #[tokio::test]
    async fn clean_load_drops_null_columns_then_rows() {
        let dir = TempDir::new().unwrap();
        // DT_OBITO is never filled; row 2 is missing its sex.
        let store = staged_store(
            &dir,
            "NU_NOTIFIC,CS_SEXO,DT_OBITO\n1,F,\n2,,\n3,M,\n",
        )
        .await;

        let (data, summary) = store.clean_load("sinan", 0).await.unwrap();

        assert_eq!(summary.dropped_columns, vec!["DT_OBITO".to_string()]);
        assert_eq!(summary.dropped_rows, 1);
        assert_eq!(data.headers(), &["NU_NOTIFIC", "CS_SEXO"]);
        assert_eq!(data.rows().len(), 2);
    }

    #[tokio::test]
    async fn load_missing_table_fails() {
        let store = SinanStore::new(setup_test_database().await.unwrap());
        let error = store.load("exams", 0).await.unwrap_err();
        assert!(matches!(error, StoreError::TableMissing { name } if name == "exams"));
    }
}
