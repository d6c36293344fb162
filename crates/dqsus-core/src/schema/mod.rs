//! Column schemas and table validation.
//!
//! A [`TableSchema`] describes what a themed table should look like after
//! transformation. [`validate_table`] checks real data against it and
//! produces a [`ValidationReport`] instead of failing on the first issue,
//! so one run surfaces everything that is wrong with a table.

mod builtin;
mod report;
mod table;
mod validate;

pub use builtin::builtin_schema;
pub use report::{IssueKind, IssueSeverity, ValidationIssue, ValidationReport};
pub use table::{ColumnSchema, ColumnType, TableSchema};
pub use validate::validate_table;
