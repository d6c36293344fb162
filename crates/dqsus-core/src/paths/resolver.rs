//! Pure path resolver for testing and CLI introspection.
//!
//! Captures all resolved paths in one call, making it easy to compare
//! path resolution across entry points and expose via the `dqsus paths`
//! CLI command.

use std::path::{Path, PathBuf};

use super::database::database_path_under;
use super::raw::raw_dir_under;
use super::{
    DirectoryCreationStrategy, PathError, data_root, database_path, ensure_directory, raw_data_dir,
};

/// All resolved paths captured in a single struct.
///
/// Use it for:
/// - Integration tests comparing resolution across entry points
/// - CLI `dqsus paths` command output
/// - Debugging path resolution issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory raw CSV downloads land in.
    pub raw_data_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    ///
    /// Calls each path resolver once and captures the results. Use this
    /// instead of calling individual resolvers when you need multiple
    /// paths - it guarantees a consistent snapshot.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: database_path()?,
            raw_data_dir: raw_data_dir()?,
        })
    }

    /// Resolve all paths under an explicit data root.
    ///
    /// `None` falls back to [`ResolvedPaths::resolve`], so callers can
    /// pass an optional override straight through. The override
    /// directory is created if it does not exist.
    pub fn resolve_with(data_dir: Option<&Path>) -> Result<Self, PathError> {
        let Some(root) = data_dir else {
            return Self::resolve();
        };

        ensure_directory(root, DirectoryCreationStrategy::AutoCreate)?;
        Ok(Self {
            data_root: root.to_path_buf(),
            database_path: database_path_under(root)?,
            raw_data_dir: raw_dir_under(root)?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "database_path = {}", self.database_path.display())?;
        write!(f, "raw_data_dir = {}", self.raw_data_dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{DATA_DIR_ENV, ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn resolve_returns_consistent_paths() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let first = ResolvedPaths::resolve().expect("first resolve");
        let second = ResolvedPaths::resolve().expect("second resolve");

        assert_eq!(first, second, "path resolution should be deterministic");
        assert!(first.database_path.starts_with(&first.data_root));
        assert!(first.raw_data_dir.starts_with(&first.data_root));
    }

    #[test]
    fn explicit_override_skips_the_environment() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested").join("dqsus");

        let paths = ResolvedPaths::resolve_with(Some(&root)).expect("resolve with override");

        assert_eq!(paths.data_root, root);
        assert_eq!(paths.database_path, root.join("db").join("dqsus.db"));
        assert_eq!(paths.raw_data_dir, root.join("raw"));
        assert!(paths.raw_data_dir.is_dir());
    }

    #[test]
    fn display_format_is_parseable() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let paths = ResolvedPaths::resolve().expect("resolve");
        let output = paths.to_string();

        assert!(output.contains("data_root = "));
        assert!(output.contains("database_path = "));
        assert!(output.contains("raw_data_dir = "));
    }
}
