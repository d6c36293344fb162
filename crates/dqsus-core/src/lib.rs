#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod mapping;
pub mod paths;
pub mod schema;
pub mod tabular;
pub mod text;

// Re-export commonly used types for convenience
pub use domain::{
    DATASET_EXTENSION, DatasetFile, Disease, InvalidDisease, NOTIFICATION_KEY, STAGING_TABLE,
    ThemedTable, UnknownTable, filename, parse_year,
};
pub use mapping::{
    ColumnMapping, MappingError, MappingLanguage, MappingResult, UnknownLanguage, load_mapping,
};
pub use schema::{
    ColumnSchema, ColumnType, IssueKind, IssueSeverity, TableSchema, ValidationIssue,
    ValidationReport, builtin_schema, validate_table,
};
pub use tabular::{CleanupSummary, TableData, TabularError, TabularResult};
pub use text::strip_diacritics;

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, DirectoryCreationStrategy, PathError, ResolvedPaths, data_root, database_path,
    disease_dir, ensure_directory, raw_data_dir, verify_writable,
};
