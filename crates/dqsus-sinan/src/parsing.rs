//! JSON parsing functions for mirror listings.
//!
//! Sync parsing functions that convert raw JSON responses into typed
//! domain objects, kept separate from the async client for testability.

use dqsus_core::{DatasetFile, Disease};
use serde_json::Value;

use crate::error::{SinanError, SinanResult};
use crate::listing::ListingEntry;

// ============================================================================
// Listing Parsing
// ============================================================================

/// Parse a `files.json` document into listing entries.
///
/// The mirror serves either an array of `{"name", "size"}` objects or a
/// bare array of filename strings; both shapes are accepted. Entries of
/// any other shape are skipped.
pub fn parse_listing(json: &Value) -> SinanResult<Vec<ListingEntry>> {
    let items = json.as_array().ok_or_else(|| SinanError::InvalidResponse {
        message: "listing is not an array".to_string(),
    })?;

    let entries = items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(ListingEntry::named(name)),
            Value::Object(_) => serde_json::from_value(item.clone()).ok(),
            _ => None,
        })
        .collect();

    Ok(entries)
}

/// Turn listing entries into dataset files for `disease`.
///
/// Entries whose names carry no year marker (readmes, auxiliary tables)
/// are skipped. The result is sorted by year and deduplicated.
pub fn datasets_from_listing(disease: Disease, entries: &[ListingEntry]) -> Vec<DatasetFile> {
    let mut files: Vec<DatasetFile> = entries
        .iter()
        .filter_map(|entry| DatasetFile::from_listing(disease, &entry.name))
        .collect();
    files.sort();
    files.dedup();
    files
}

/// Distinct years covered by a set of dataset files, ascending.
pub fn years_of(files: &[DatasetFile]) -> Vec<u16> {
    let mut years: Vec<u16> = files.iter().map(|file| file.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Human sentence describing which years are published for a disease.
pub fn availability_sentence(disease: Disease, years: &[u16]) -> String {
    if years.is_empty() {
        return format!("No data is currently available for {disease}.");
    }
    let listed = years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("The available data for {disease} is from the years: {listed}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_listing_accepts_objects() {
        let json = json!([
            {"name": "DENGBR22.csv", "size": 100},
            {"name": "DENGBR23.csv"}
        ]);
        let entries = parse_listing(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].size, Some(100));
        assert_eq!(entries[1].size, None);
    }

    #[test]
    fn parse_listing_accepts_bare_strings() {
        let json = json!(["DENGBR22.csv", "DENGBR23.csv"]);
        let entries = parse_listing(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "DENGBR22.csv");
    }

    #[test]
    fn parse_listing_skips_odd_entries() {
        let json = json!(["DENGBR22.csv", 42, null, {"size": 10}]);
        let entries = parse_listing(&json).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn parse_listing_rejects_non_arrays() {
        let err = parse_listing(&json!({"files": []})).unwrap_err();
        assert!(matches!(err, SinanError::InvalidResponse { .. }));
    }

    #[test]
    fn datasets_skip_unparseable_names_and_sort() {
        let entries = vec![
            ListingEntry::named("DENGBR23.csv"),
            ListingEntry::named("README.txt"),
            ListingEntry::named("DENGBR21.csv"),
            ListingEntry::named("DENGBR23.csv"),
        ];
        let files = datasets_from_listing(Disease::Dengue, &entries);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].year, 2021);
        assert_eq!(files[1].year, 2023);
    }

    #[test]
    fn years_are_sorted_and_deduplicated() {
        let files = vec![
            DatasetFile::new(Disease::Zika, 2017),
            DatasetFile::new(Disease::Zika, 2016),
            DatasetFile::new(Disease::Zika, 2017),
        ];
        assert_eq!(years_of(&files), vec![2016, 2017]);
    }

    #[test]
    fn sentence_lists_years() {
        let sentence = availability_sentence(Disease::Dengue, &[2022, 2023]);
        assert_eq!(
            sentence,
            "The available data for dengue is from the years: 2022, 2023."
        );
    }

    #[test]
    fn sentence_for_empty_years() {
        let sentence = availability_sentence(Disease::Zika, &[]);
        assert_eq!(sentence, "No data is currently available for zika.");
    }
}
