//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: resolved paths, the database pool and store
//! (via dqsus-db) and the catalog client (via dqsus-sinan). Command
//! handlers receive the composed `CliContext` and delegate work to it.
//!
//! Fetchers are not part of the context: their force/progress options
//! vary per command, so handlers build them from the resolved paths.

use std::path::PathBuf;

use anyhow::Result;

use dqsus_core::{ResolvedPaths, verify_writable};
use dqsus_db::{SinanStore, setup_database};
use dqsus_sinan::{DefaultSinanClient, SinanClientConfig};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Data root override (`--data-dir`); `None` resolves normally.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Config with an optional data root override.
    #[must_use]
    pub const fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Catalog client for the SINAN mirror.
    pub client: DefaultSinanClient,
    /// Embedded store over the resolved database.
    pub store: SinanStore,
    /// Paths everything operates under.
    pub paths: ResolvedPaths,
}

/// Bootstrap the CLI application.
///
/// Resolves paths (honoring the `--data-dir` override), opens the
/// database and builds the catalog client from the environment.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let paths = ResolvedPaths::resolve_with(config.data_dir.as_deref())?;
    verify_writable(&paths.data_root)?;

    let pool = setup_database(&paths.database_path).await?;
    let store = SinanStore::new(pool);

    let client = DefaultSinanClient::new(&SinanClientConfig::from_env())?;

    Ok(CliContext {
        client,
        store,
        paths,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn bootstrap_with_data_dir_override() {
        let temp = tempdir().unwrap();
        let config = CliConfig::new(Some(temp.path().join("dqsus")));

        let ctx = bootstrap(config).await.unwrap();

        assert!(ctx.paths.database_path.is_file());
        assert!(ctx.paths.raw_data_dir.is_dir());
        assert!(!ctx.store.table_exists("sinan").await.unwrap());
    }
}
