//! Database path resolution.
//!
//! Provides the canonical path to the dqsus `SQLite` database file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::data_root;

/// Get the path to the dqsus database file.
///
/// Returns the path to `dqsus.db` in the user data directory.
/// The `db/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_under(&data_root()?)
}

/// Database path under an explicit data root.
pub(super) fn database_path_under(root: &Path) -> Result<PathBuf, PathError> {
    let db_dir = root.join("db");

    fs::create_dir_all(&db_dir).map_err(|e| PathError::CreateFailed {
        path: db_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(db_dir.join("dqsus.db"))
}
