use std::fmt;

/// How serious a validation issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    /// Worth looking at, does not fail validation.
    Warning,
    /// Fails validation.
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// What kind of problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A column the schema expects is not in the table.
    MissingColumn,
    /// A table column the schema does not know about.
    UnexpectedColumn,
    /// A required column holds a null value.
    NullValue,
    /// A value does not parse as the expected type.
    TypeMismatch,
    /// A value falls outside the column's coded set.
    DisallowedValue,
}

/// A single problem found while validating a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Problem category.
    pub kind: IssueKind,
    /// Severity of the problem.
    pub severity: IssueSeverity,
    /// Column the problem was found in.
    pub column: String,
    /// Zero-based row index for cell-level problems.
    pub row: Option<usize>,
    /// Human-readable description.
    pub detail: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(
                f,
                "{}: column '{}' row {}: {}",
                self.severity, self.column, row, self.detail
            ),
            None => write!(f, "{}: column '{}': {}", self.severity, self.column, self.detail),
        }
    }
}

/// Outcome of validating one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Table that was validated.
    pub table: String,
    /// Number of data rows inspected.
    pub rows_checked: usize,
    /// Everything that was found, in discovery order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A clean report for a table.
    #[must_use]
    pub fn clean(table: impl Into<String>, rows_checked: usize) -> Self {
        Self {
            table: table.into(),
            rows_checked,
            issues: Vec::new(),
        }
    }

    /// Whether the table passed (no error-severity issues).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity issues.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    /// Number of warning-severity issues.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} rows checked, {} errors, {} warnings",
            self.table,
            self.rows_checked,
            self.error_count(),
            self.warning_count()
        )
    }
}
