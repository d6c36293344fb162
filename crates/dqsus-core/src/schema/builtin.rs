use crate::domain::{NOTIFICATION_KEY, ThemedTable};

use super::table::{ColumnSchema, ColumnType, TableSchema};

/// Yes/no/ignored coding used across the notification form.
const YES_NO_IGNORED: &[&str] = &["1", "2", "9"];

/// Columns coded with the yes/no/ignored convention.
const CODED_COLUMNS: &[&str] = &[
    "fever",
    "myalgia",
    "headache",
    "rash",
    "vomiting",
    "nausea",
    "back_pain",
    "conjunctivitis",
    "arthritis",
    "arthralgia",
    "petechiae",
    "leukopenia",
    "tourniquet_test",
    "retroorbital_pain",
    "diabetes",
    "hematologic_disease",
    "liver_disease",
    "kidney_disease",
    "hypertension",
    "peptic_ulcer_disease",
    "autoimmune_disease",
    "hospitalization",
    "autochthonous_case",
    "work_related",
];

/// Columns holding numeric codes that do not fit a suffix rule.
const INTEGER_COLUMNS: &[&str] = &[
    "record_type",
    "health_unit",
    "final_classification",
    "confirmation_criteria",
    "case_outcome",
    "age_code",
    "pregnancy_stage",
    "race",
    "education_level",
    "occupation",
    "batch_number",
    "system_type",
    "return_flow",
    "received_flow",
    "duplicate_number",
    "chik_clinical_form",
];

/// Name suffixes whose columns hold numeric codes.
const INTEGER_SUFFIXES: &[&str] = &[
    "_week", "_year", "_state", "_city", "_region", "_country", "_result",
];

fn classify(name: &str) -> ColumnSchema {
    if name == NOTIFICATION_KEY {
        return ColumnSchema::new(name, ColumnType::Integer).required();
    }
    if name.ends_with("_date") {
        return ColumnSchema::new(name, ColumnType::Date);
    }
    if name == "sex" {
        return ColumnSchema::new(name, ColumnType::Text).allowed(&["F", "M", "I"]);
    }
    if name == "serotype" {
        return ColumnSchema::new(name, ColumnType::Text).allowed(&["1", "2", "3", "4"]);
    }
    if name.starts_with("alarm_") || name.starts_with("severe_") || CODED_COLUMNS.contains(&name) {
        return ColumnSchema::new(name, ColumnType::Text).allowed(YES_NO_IGNORED);
    }
    if INTEGER_COLUMNS.contains(&name)
        || INTEGER_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
    {
        return ColumnSchema::new(name, ColumnType::Integer);
    }
    ColumnSchema::new(name, ColumnType::Text)
}

/// The bundled schema for a themed table.
#[must_use]
pub fn builtin_schema(table: ThemedTable) -> TableSchema {
    let columns = table.columns().iter().map(|name| classify(name)).collect();
    TableSchema::new(table.name(), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_table;
    use crate::tabular::TableData;

    #[test]
    fn schemas_cover_every_themed_column() {
        for table in ThemedTable::ALL {
            let schema = builtin_schema(table);
            assert_eq!(schema.table, table.name());
            assert_eq!(schema.columns.len(), table.columns().len());
            for name in table.columns() {
                assert!(schema.column(name).is_some(), "{name} missing");
            }
        }
    }

    #[test]
    fn notification_key_is_a_required_integer_everywhere() {
        for table in ThemedTable::ALL {
            let schema = builtin_schema(table);
            let key = schema.column(NOTIFICATION_KEY).unwrap();
            assert!(key.required, "{table}");
            assert_eq!(key.column_type, ColumnType::Integer, "{table}");
        }
    }

    #[test]
    fn date_suffix_wins_over_alarm_prefix() {
        let schema = builtin_schema(ThemedTable::AlarmsSeverities);
        let alarm_date = schema.column("alarm_date").unwrap();
        assert_eq!(alarm_date.column_type, ColumnType::Date);
        assert!(alarm_date.allowed_values.is_none());

        let alarm_bleeding = schema.column("alarm_bleeding").unwrap();
        assert_eq!(
            alarm_bleeding.allowed_values.as_deref(),
            Some(&["1".to_string(), "2".to_string(), "9".to_string()][..])
        );
    }

    #[test]
    fn plausible_clinical_rows_pass_the_builtin_schema() {
        let schema = builtin_schema(ThemedTable::PatientDiseases);
        let headers: Vec<String> = ThemedTable::PatientDiseases
            .columns()
            .iter()
            .map(ToString::to_string)
            .collect();
        let row: Vec<Option<String>> = std::iter::once("20230001".to_string())
            .chain(std::iter::repeat_n("2".to_string(), headers.len() - 1))
            .map(Some)
            .collect();
        let data = TableData::new(headers, vec![row]).unwrap();
        let report = validate_table(&schema, &data);
        assert!(report.passed(), "{report}");
    }
}
