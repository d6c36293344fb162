//! Themed table transform.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::StoreResult;
use crate::store::{SinanStore, quote_ident};
use dqsus_core::{STAGING_TABLE, ThemedTable};

impl SinanStore {
    /// Rebuild the eight themed tables from the staging table.
    ///
    /// Each themed table is dropped and recreated as a `SELECT` of its
    /// column group, intersected with the columns actually present in
    /// staging. A table whose group has no present columns at all is
    /// dropped and skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails when the staging table does not exist or a rebuild
    /// statement is rejected.
    pub async fn transform(&self) -> StoreResult<()> {
        let staging: HashSet<String> = self.staging_columns().await?.into_iter().collect();

        for table in ThemedTable::ALL {
            let present: Vec<&str> = table
                .columns()
                .iter()
                .copied()
                .filter(|column| staging.contains(*column))
                .collect();

            let drop_sql = format!("DROP TABLE IF EXISTS {}", quote_ident(table.name()));
            sqlx::query(&drop_sql).execute(&self.pool).await?;

            if present.is_empty() {
                warn!(table = %table, "no staging columns for themed table, skipping");
                continue;
            }

            let columns = present
                .iter()
                .map(|column| quote_ident(column))
                .collect::<Vec<_>>()
                .join(", ");
            let create_sql = format!(
                "CREATE TABLE {} AS SELECT {columns} FROM {}",
                quote_ident(table.name()),
                quote_ident(STAGING_TABLE)
            );
            sqlx::query(&create_sql).execute(&self.pool).await?;

            info!(table = %table, columns = present.len(), "rebuilt themed table");
        }

        Ok(())
    }
}
