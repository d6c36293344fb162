//! The `SinanStore` and its table introspection helpers.
//!
//! The store wraps a `SqlitePool` and exposes the pipeline operations as
//! focused submodules: ingestion, column rename, themed transform and
//! row loading.

mod ingest;
mod load;
mod rename;
mod transform;

pub use ingest::IngestedFile;

use sqlx::{Row, SqlitePool};

use crate::error::{StoreError, StoreResult};
use dqsus_core::STAGING_TABLE;

/// `SQLite`-backed store for staged and transformed SINAN tables.
pub struct SinanStore {
    pool: SqlitePool,
}

impl SinanStore {
    /// Create a store over an open pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether a table with this name exists.
    pub async fn table_exists(&self, name: &str) -> StoreResult<bool> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    /// Number of rows in a table.
    pub async fn row_count(&self, name: &str) -> StoreResult<u64> {
        if !self.table_exists(name).await? {
            return Err(StoreError::TableMissing {
                name: name.to_string(),
            });
        }
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(name));
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count.unsigned_abs())
    }

    /// Column names of the staging table, in table order.
    pub async fn staging_columns(&self) -> StoreResult<Vec<String>> {
        self.columns_of(STAGING_TABLE).await
    }

    /// Column names of any table, in table order.
    pub(crate) async fn columns_of(&self, table: &str) -> StoreResult<Vec<String>> {
        // table_info yields one row per column, ordered by cid
        let sql = format!("PRAGMA table_info({})", quote_ident(table));
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        if rows.is_empty() {
            return Err(StoreError::TableMissing {
                name: table.to_string(),
            });
        }
        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            columns.push(row.try_get::<String, _>("name")?);
        }
        Ok(columns)
    }
}

/// Double-quote an identifier for generated SQL.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[test]
    fn quote_ident_escapes_embedded_quotes() {
        assert_eq!(quote_ident("sinan"), "\"sinan\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[tokio::test]
    async fn table_exists_reflects_schema() {
        let pool = setup_test_database().await.unwrap();
        let store = SinanStore::new(pool);

        assert!(!store.table_exists("sinan").await.unwrap());

        sqlx::query("CREATE TABLE sinan (\"NU_NOTIFIC\" TEXT)")
            .execute(&store.pool)
            .await
            .unwrap();

        assert!(store.table_exists("sinan").await.unwrap());
        assert_eq!(store.staging_columns().await.unwrap(), vec!["NU_NOTIFIC"]);
    }

    #[tokio::test]
    async fn row_count_requires_the_table() {
        let pool = setup_test_database().await.unwrap();
        let store = SinanStore::new(pool);

        let error = store.row_count("sinan").await.unwrap_err();
        assert!(matches!(error, StoreError::TableMissing { name } if name == "sinan"));
    }
}
