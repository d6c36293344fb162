use std::fmt;

/// Expected type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Free text, always accepted.
    #[default]
    Text,
    /// Whole number, parsed as `i64`.
    Integer,
    /// ISO calendar date (`YYYY-MM-DD`).
    Date,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Date => "date",
        };
        f.write_str(label)
    }
}

/// Expectations for a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Column name after renaming.
    pub name: String,
    /// Expected value type.
    pub column_type: ColumnType,
    /// Whether null values are rejected.
    pub required: bool,
    /// Closed set of accepted values, when the column is coded.
    pub allowed_values: Option<Vec<String>>,
}

impl ColumnSchema {
    /// An optional column of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: false,
            allowed_values: None,
        }
    }

    /// Mark the column as required (nulls become errors).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the column to a closed set of coded values.
    #[must_use]
    pub fn allowed(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(ToString::to_string).collect());
        self
    }
}

/// Expectations for a whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table the schema applies to.
    pub table: String,
    /// Per-column expectations.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Build a schema from a column list.
    #[must_use]
    pub fn new(table: impl Into<String>, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }

    /// Look up a column's expectations by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|column| column.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags() {
        let column = ColumnSchema::new("sex", ColumnType::Text).allowed(&["F", "M", "I"]);
        assert!(!column.required);
        assert_eq!(
            column.allowed_values.as_deref(),
            Some(&["F".to_string(), "M".to_string(), "I".to_string()][..])
        );

        let key = ColumnSchema::new("notification_number", ColumnType::Integer).required();
        assert!(key.required);
    }

    #[test]
    fn schema_lookup_by_name() {
        let schema = TableSchema::new(
            "exams",
            vec![ColumnSchema::new("serotype", ColumnType::Text)],
        );
        assert!(schema.column("serotype").is_some());
        assert!(schema.column("fever").is_none());
    }
}
