//! Staging column rename: diacritic strip plus language mapping.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::StoreResult;
use crate::store::{SinanStore, quote_ident};
use dqsus_core::{MappingLanguage, STAGING_TABLE, load_mapping, strip_diacritics};

impl SinanStore {
    /// Rename staging columns to the bundled names for `language`.
    ///
    /// Runs as a single transaction in two passes: first every existing
    /// column is stripped of diacritics, then each mapping entry whose
    /// source matches a (stripped) column is renamed to its target.
    /// Returns the mapping sources that matched no column, for callers
    /// to warn about.
    ///
    /// # Errors
    ///
    /// Fails when the staging table does not exist or a rename is
    /// rejected; no renames stick in that case.
    pub async fn rename_columns(&self, language: MappingLanguage) -> StoreResult<Vec<String>> {
        let mapping = load_mapping(language)?;
        let existing = self.staging_columns().await?;

        let mut tx = self.pool.begin().await?;

        for column in &existing {
            let normalized = strip_diacritics(column);
            if normalized != *column {
                let sql = rename_statement(column, &normalized);
                sqlx::query(&sql).execute(&mut *tx).await?;
                debug!(from = %column, to = %normalized, "stripped diacritics from column");
            }
        }

        let normalized_existing: HashSet<String> =
            existing.iter().map(|column| strip_diacritics(column)).collect();

        let mut unmapped = Vec::new();
        for (source, target) in mapping.iter() {
            let normalized_source = strip_diacritics(source);
            if normalized_existing.contains(&normalized_source) {
                let sql = rename_statement(&normalized_source, target);
                sqlx::query(&sql).execute(&mut *tx).await?;
            } else {
                unmapped.push(source.to_string());
            }
        }

        tx.commit().await?;

        info!(
            language = %language,
            renamed = mapping.len() - unmapped.len(),
            unmapped = unmapped.len(),
            "renamed staging columns"
        );
        Ok(unmapped)
    }
}

fn rename_statement(from: &str, to: &str) -> String {
    format!(
        "ALTER TABLE {} RENAME COLUMN {} TO {}",
        quote_ident(STAGING_TABLE),
        quote_ident(from),
        quote_ident(to)
    )
}
