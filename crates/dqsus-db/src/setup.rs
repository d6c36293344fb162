//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! `SQLite` database file. Entry points call this with the resolved
//! database path. There is no fixed schema to bootstrap: the `sinan`
//! staging table is created by ingestion from each file's header row,
//! and the themed tables are created by the transform step.

use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
#[cfg(any(test, feature = "test-utils"))]
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;

/// Opens the `SQLite` database, creating the file if it does not exist.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// database file cannot be opened.
///
/// # Example
///
/// ```rust,no_run
/// use dqsus_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let db_path = Path::new("/path/to/dqsus.db");
/// let pool = setup_database(db_path).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Each pooled connection would own its own in-memory database, so the
/// pool is capped at a single connection.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_database_creates_file() {
        let temp = tempfile::tempdir().unwrap();
        let db_path = temp.path().join("db").join("dqsus.db");

        let pool = setup_database(&db_path).await.unwrap();

        assert!(db_path.is_file());
        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        sqlx::query("CREATE TABLE probe (id INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM probe")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
