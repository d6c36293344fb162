//! Paths for raw dataset downloads.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Disease;

use super::error::PathError;
use super::platform::data_root;

/// Directory raw CSV downloads land in (`<data root>/raw`).
///
/// Created if it doesn't exist.
pub fn raw_data_dir() -> Result<PathBuf, PathError> {
    raw_dir_under(&data_root()?)
}

/// Raw download directory under an explicit data root.
pub(super) fn raw_dir_under(root: &Path) -> Result<PathBuf, PathError> {
    let raw_dir = root.join("raw");

    fs::create_dir_all(&raw_dir).map_err(|e| PathError::CreateFailed {
        path: raw_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(raw_dir)
}

/// Per-disease subdirectory under the raw data directory.
///
/// Created if it doesn't exist.
pub fn disease_dir(disease: Disease) -> Result<PathBuf, PathError> {
    let dir = raw_data_dir()?.join(disease.code());

    fs::create_dir_all(&dir).map_err(|e| PathError::CreateFailed {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{DATA_DIR_ENV, ENV_LOCK, EnvVarGuard};
    use tempfile::tempdir;

    #[test]
    fn disease_dir_nests_under_raw() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = tempdir().unwrap();
        let _env = EnvVarGuard::set(DATA_DIR_ENV, temp.path().to_string_lossy().as_ref());

        let dir = disease_dir(Disease::Dengue).unwrap();
        assert!(dir.ends_with("raw/DENG"));
        assert!(dir.is_dir());
    }
}
