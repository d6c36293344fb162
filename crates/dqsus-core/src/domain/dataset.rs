//! SINAN dataset filename handling.
//!
//! Yearly files follow the `{CODE}BR{YY}.csv` convention, e.g. `DENGBR23.csv`
//! for the 2023 dengue file. The two-digit year is relative to 2000, matching
//! how the upstream mirror has named files since the system went national.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::disease::Disease;

/// File extension used by the mirror's CSV exports.
pub const DATASET_EXTENSION: &str = "csv";

/// A single yearly dataset file for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetFile {
    /// Disease the file belongs to.
    pub disease: Disease,
    /// Four-digit year covered by the file.
    pub year: u16,
    /// Filename as served by the mirror (e.g. `DENGBR23.csv`).
    pub name: String,
}

impl DatasetFile {
    /// Build the dataset file reference for a disease/year pair.
    #[must_use]
    pub fn new(disease: Disease, year: u16) -> Self {
        Self {
            disease,
            year,
            name: filename(disease, year),
        }
    }

    /// Interpret a listed filename as a dataset for `disease`.
    ///
    /// Returns `None` when the name does not carry a `BRYY` year marker;
    /// such entries (readmes, auxiliary tables) are skipped by discovery.
    #[must_use]
    pub fn from_listing(disease: Disease, name: &str) -> Option<Self> {
        let year = parse_year(name)?;
        Some(Self {
            disease,
            year,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for DatasetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.disease, self.year)
    }
}

/// Canonical filename for a disease/year pair.
#[must_use]
pub fn filename(disease: Disease, year: u16) -> String {
    format!(
        "{}BR{:02}.{DATASET_EXTENSION}",
        disease.code(),
        year % 100
    )
}

/// Extract the four-digit year from a dataset filename.
///
/// Looks for the first `BR` marker followed by exactly two ASCII digits and
/// maps it onto 2000. Returns `None` when no marker is present.
#[must_use]
pub fn parse_year(name: &str) -> Option<u16> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i + 4 <= bytes.len() {
        if &bytes[i..i + 2] == b"BR"
            && bytes[i + 2].is_ascii_digit()
            && bytes[i + 3].is_ascii_digit()
        {
            let tens = u16::from(bytes[i + 2] - b'0');
            let ones = u16::from(bytes[i + 3] - b'0');
            return Some(2000 + tens * 10 + ones);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_pads_two_digit_years() {
        assert_eq!(filename(Disease::Dengue, 2023), "DENGBR23.csv");
        assert_eq!(filename(Disease::Zika, 2016), "ZIKABR16.csv");
        assert_eq!(filename(Disease::Chikungunya, 2007), "CHIKBR07.csv");
        assert_eq!(filename(Disease::Dengue, 2000), "DENGBR00.csv");
    }

    #[test]
    fn parse_year_reads_the_br_marker() {
        assert_eq!(parse_year("DENGBR23.csv"), Some(2023));
        assert_eq!(parse_year("ZIKABR16.csv"), Some(2016));
        assert_eq!(parse_year("CHIKBR07.csv"), Some(2007));
    }

    #[test]
    fn parse_year_rejects_names_without_marker() {
        assert_eq!(parse_year("README.txt"), None);
        assert_eq!(parse_year("DENGBR9.csv"), None);
        assert_eq!(parse_year("DENG23.csv"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn parse_year_takes_the_first_marker() {
        // Pathological but possible: only the first BRYY counts.
        assert_eq!(parse_year("BR12_backup_BR99.csv"), Some(2012));
    }

    #[test]
    fn from_listing_round_trips_generated_names() {
        let file = DatasetFile::new(Disease::Chikungunya, 2022);
        let parsed = DatasetFile::from_listing(Disease::Chikungunya, &file.name).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn dataset_files_order_by_disease_then_year() {
        let mut files = vec![
            DatasetFile::new(Disease::Zika, 2016),
            DatasetFile::new(Disease::Dengue, 2023),
            DatasetFile::new(Disease::Dengue, 2022),
        ];
        files.sort();
        assert_eq!(files[0].year, 2022);
        assert_eq!(files[1].year, 2023);
        assert_eq!(files[2].disease, Disease::Zika);
    }
}
