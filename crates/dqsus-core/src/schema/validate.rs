use chrono::NaiveDate;

use crate::tabular::TableData;

use super::report::{IssueKind, IssueSeverity, ValidationIssue, ValidationReport};
use super::table::{ColumnSchema, ColumnType, TableSchema};

/// Check `data` against `schema`, collecting every issue found.
///
/// Structural checks run first: schema columns missing from the table are
/// errors when required and warnings otherwise (cleanup may legitimately
/// drop an all-null optional column), and unknown table columns are
/// warnings. Cell checks then run over the columns both sides share.
#[must_use]
pub fn validate_table(schema: &TableSchema, data: &TableData) -> ValidationReport {
    let mut report = ValidationReport::clean(schema.table.clone(), data.row_count());

    for column in &schema.columns {
        if data.column_index(&column.name).is_none() {
            let severity = if column.required {
                IssueSeverity::Error
            } else {
                IssueSeverity::Warning
            };
            report.issues.push(ValidationIssue {
                kind: IssueKind::MissingColumn,
                severity,
                column: column.name.clone(),
                row: None,
                detail: "column not present in table".to_string(),
            });
        }
    }

    for header in data.headers() {
        if schema.column(header).is_none() {
            report.issues.push(ValidationIssue {
                kind: IssueKind::UnexpectedColumn,
                severity: IssueSeverity::Warning,
                column: header.clone(),
                row: None,
                detail: "column not covered by the schema".to_string(),
            });
        }
    }

    for column in &schema.columns {
        let Some(index) = data.column_index(&column.name) else {
            continue;
        };
        for (row, values) in data.rows().iter().enumerate() {
            check_cell(&mut report, column, row, values[index].as_deref());
        }
    }

    report
}

fn check_cell(
    report: &mut ValidationReport,
    column: &ColumnSchema,
    row: usize,
    value: Option<&str>,
) {
    let Some(value) = value else {
        if column.required {
            report.issues.push(ValidationIssue {
                kind: IssueKind::NullValue,
                severity: IssueSeverity::Error,
                column: column.name.clone(),
                row: Some(row),
                detail: "null value in required column".to_string(),
            });
        }
        return;
    };

    match column.column_type {
        ColumnType::Text => {}
        ColumnType::Integer => {
            if value.trim().parse::<i64>().is_err() {
                report.issues.push(ValidationIssue {
                    kind: IssueKind::TypeMismatch,
                    severity: IssueSeverity::Error,
                    column: column.name.clone(),
                    row: Some(row),
                    detail: format!("'{value}' is not an integer"),
                });
                return;
            }
        }
        ColumnType::Date => {
            if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
                report.issues.push(ValidationIssue {
                    kind: IssueKind::TypeMismatch,
                    severity: IssueSeverity::Error,
                    column: column.name.clone(),
                    row: Some(row),
                    detail: format!("'{value}' is not a YYYY-MM-DD date"),
                });
                return;
            }
        }
    }

    if let Some(allowed) = &column.allowed_values
        && !allowed.iter().any(|candidate| candidate == value)
    {
        report.issues.push(ValidationIssue {
            kind: IssueKind::DisallowedValue,
            severity: IssueSeverity::Error,
            column: column.name.clone(),
            row: Some(row),
            detail: format!("'{value}' is not one of {}", allowed.join(", ")),
        });
    }
}
