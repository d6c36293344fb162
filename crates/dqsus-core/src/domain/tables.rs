//! Themed table layout for transformed SINAN data.
//!
//! After renaming, the wide staging table is split into eight narrower
//! tables grouped by theme. Every themed table keeps the notification
//! number so records can be joined back together.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Name of the wide staging table raw CSV rows are ingested into.
pub const STAGING_TABLE: &str = "sinan";

/// Column shared by all themed tables, used to join them back together.
pub const NOTIFICATION_KEY: &str = "notification_number";

/// Error returned when a table name does not match any themed table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table '{input}': expected one of {}", ThemedTable::names().join(", "))]
pub struct UnknownTable {
    /// The rejected input.
    pub input: String,
}

/// One of the themed tables produced by the transform step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemedTable {
    /// Notification metadata: dates, places and case classification.
    NotificationsInfo,
    /// Patient demographics and residence.
    PersonalData,
    /// Reported clinical signs and symptoms.
    ClinicalSigns,
    /// Pre-existing conditions of the patient.
    PatientDiseases,
    /// Laboratory exams and their results.
    Exams,
    /// Hospitalization details.
    HospitalInfo,
    /// Alarm signs and severity markers.
    AlarmsSeverities,
    /// Bookkeeping fields internal to the surveillance system.
    SinanInternalInfo,
}

impl ThemedTable {
    /// All themed tables in their canonical creation order.
    pub const ALL: [Self; 8] = [
        Self::NotificationsInfo,
        Self::PersonalData,
        Self::ClinicalSigns,
        Self::PatientDiseases,
        Self::Exams,
        Self::HospitalInfo,
        Self::AlarmsSeverities,
        Self::SinanInternalInfo,
    ];

    /// SQL table name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotificationsInfo => "notifications_info",
            Self::PersonalData => "personal_data",
            Self::ClinicalSigns => "clinical_signs",
            Self::PatientDiseases => "patient_diseases",
            Self::Exams => "exams",
            Self::HospitalInfo => "hospital_info",
            Self::AlarmsSeverities => "alarms_severities",
            Self::SinanInternalInfo => "sinan_internal_info",
        }
    }

    /// Columns the table is built from, notification key first.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::NotificationsInfo => &[
                NOTIFICATION_KEY,
                "record_type",
                "disease_code",
                "notification_date",
                "notification_week",
                "notification_year",
                "notification_state",
                "notification_city",
                "notification_region",
                "health_unit",
                "symptom_onset_date",
                "symptom_onset_week",
                "investigation_date",
                "closure_date",
                "final_classification",
                "confirmation_criteria",
                "case_outcome",
                "death_date",
                "autochthonous_case",
                "infection_state",
                "infection_city",
                "infection_country",
            ],
            Self::PersonalData => &[
                NOTIFICATION_KEY,
                "birth_date",
                "age_code",
                "sex",
                "pregnancy_stage",
                "race",
                "education_level",
                "occupation",
                "residence_state",
                "residence_city",
                "residence_region",
                "residence_country",
                "work_related",
            ],
            Self::ClinicalSigns => &[
                NOTIFICATION_KEY,
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
            ],
            Self::PatientDiseases => &[
                NOTIFICATION_KEY,
                "diabetes",
                "hematologic_disease",
                "liver_disease",
                "kidney_disease",
                "hypertension",
                "peptic_ulcer_disease",
                "autoimmune_disease",
            ],
            Self::Exams => &[
                NOTIFICATION_KEY,
                "serology_date",
                "serology_result",
                "ns1_test_date",
                "ns1_test_result",
                "viral_isolation_date",
                "viral_isolation_result",
                "pcr_date",
                "pcr_result",
                "serotype",
                "histopathology_result",
                "immunohistochemistry_result",
                "chik_serology1_date",
                "chik_serology1_result",
                "chik_serology2_date",
                "chik_serology2_result",
                "prnt_date",
                "prnt_result",
            ],
            Self::HospitalInfo => &[
                NOTIFICATION_KEY,
                "hospitalization",
                "hospitalization_date",
                "hospital_state",
                "hospital_city",
            ],
            Self::AlarmsSeverities => &[
                NOTIFICATION_KEY,
                "alarm_hypotension",
                "alarm_thrombocytopenia",
                "alarm_persistent_vomiting",
                "alarm_bleeding",
                "alarm_hematocrit_rise",
                "alarm_abdominal_pain",
                "alarm_lethargy",
                "alarm_hepatomegaly",
                "alarm_fluid_accumulation",
                "alarm_date",
                "severe_weak_pulse",
                "severe_converging_bp",
                "severe_capillary_refill",
                "severe_respiratory_failure",
                "severe_tachycardia",
                "severe_cold_extremities",
                "severe_hypotension",
                "severe_hematemesis",
                "severe_melena",
                "severe_metrorrhagia",
                "severe_bleeding",
                "severe_ast_alt_elevation",
                "severe_myocarditis",
                "severe_consciousness_impairment",
                "severe_organ_failure",
                "severity_date",
                "chik_clinical_form",
            ],
            Self::SinanInternalInfo => &[
                NOTIFICATION_KEY,
                "batch_number",
                "system_type",
                "return_flow",
                "received_flow",
                "migrated_record",
                "duplicate_number",
                "data_entry_date",
            ],
        }
    }

    /// All themed table names in creation order.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|table| table.name()).collect()
    }
}

impl fmt::Display for ThemedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemedTable {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|table| table.name() == normalized)
            .ok_or_else(|| UnknownTable {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_table_starts_with_the_notification_key() {
        for table in ThemedTable::ALL {
            assert_eq!(table.columns()[0], NOTIFICATION_KEY, "{table}");
        }
    }

    #[test]
    fn non_key_columns_are_unique_across_tables() {
        let mut seen = HashSet::new();
        for table in ThemedTable::ALL {
            for column in &table.columns()[1..] {
                assert!(seen.insert(*column), "{column} appears in two tables");
            }
        }
    }

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!("exams".parse::<ThemedTable>().unwrap(), ThemedTable::Exams);
        assert_eq!(
            "Personal_Data".parse::<ThemedTable>().unwrap(),
            ThemedTable::PersonalData
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "weather".parse::<ThemedTable>().unwrap_err();
        assert_eq!(err.input, "weather");
        assert!(err.to_string().contains("notifications_info"));
    }

    #[test]
    fn staging_table_is_not_a_themed_table() {
        assert!(STAGING_TABLE.parse::<ThemedTable>().is_err());
    }
}
