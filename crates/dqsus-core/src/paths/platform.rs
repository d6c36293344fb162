//! Data root detection and resolution.
//!
//! Private helpers for resolving the platform-appropriate data directory.
//! Public API is exposed through sibling modules.

use std::env;
use std::fs;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "DQSUS_DATA_DIR";

/// Get the root directory for application data (database, raw downloads).
///
/// Resolution order:
/// 1. `DQSUS_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/dqsus`)
pub fn data_root() -> Result<PathBuf, PathError> {
    // 1. Runtime override (highest priority)
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }

    // 2. Default to system data directory
    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;

    let root = data_dir.join("dqsus");

    // Ensure it exists
    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}
