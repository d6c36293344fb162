//! Path utilities for dqsus data directories.
//!
//! This module provides the canonical path resolution for all dqsus
//! components:
//! - Database location
//! - Raw dataset downloads
//! - Application data root
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod database;
mod ensure;
mod error;
mod platform;
mod raw;
mod resolver;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Data root resolution
pub use platform::{DATA_DIR_ENV, data_root};

// Database
pub use database::database_path;

// Raw dataset downloads
pub use raw::{disease_dir, raw_data_dir};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

// Pure resolver for testing and CLI
pub use resolver::ResolvedPaths;

#[cfg(test)]
pub(crate) use test_utils::{ENV_LOCK, EnvVarGuard};
