//! Column rename mappings bundled with the crate.
//!
//! The upstream dictionary uses short uppercase codes (`NU_NOTIFIC`,
//! `DT_SIN_PRI`). The bundled JSON files map those codes onto readable
//! snake_case names, one file per supported language. Entry order follows
//! the layout of the notification form and is preserved on load.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

const MAPPING_EN: &str = include_str!("../data/columns_en.json");
const MAPPING_PT: &str = include_str!("../data/columns_pt.json");

/// Convenience alias for mapping results.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors raised while loading a column mapping.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The bundled JSON file does not parse as a string-to-string object.
    #[error("malformed column mapping for {language}")]
    Malformed {
        /// Language whose file failed to parse.
        language: MappingLanguage,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The mapping parsed but contains no entries.
    #[error("column mapping for {language} is empty")]
    Empty {
        /// Language whose file was empty.
        language: MappingLanguage,
    },
}

/// Error returned when a language code is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mapping language '{input}': expected 'en' or 'pt'")]
pub struct UnknownLanguage {
    /// The rejected input.
    pub input: String,
}

/// Target language for renamed columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MappingLanguage {
    /// English snake_case names (the default).
    #[default]
    English,
    /// Accent-free Portuguese snake_case names.
    Portuguese,
}

impl MappingLanguage {
    /// Both supported languages.
    pub const ALL: [Self; 2] = [Self::English, Self::Portuguese];

    /// Two-letter code used on the command line and in file names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Portuguese => "pt",
        }
    }
}

impl fmt::Display for MappingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MappingLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "pt" | "portuguese" => Ok(Self::Portuguese),
            _ => Err(UnknownLanguage {
                input: s.to_string(),
            }),
        }
    }
}

/// An ordered source-to-target column mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    language: MappingLanguage,
    entries: IndexMap<String, String>,
}

impl ColumnMapping {
    /// Language this mapping targets.
    #[must_use]
    pub const fn language(&self) -> MappingLanguage {
        self.language
    }

    /// Look up the target name for a source column code.
    #[must_use]
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Iterate `(source, target)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    /// Number of entries in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the bundled mapping for `language`.
pub fn load_mapping(language: MappingLanguage) -> MappingResult<ColumnMapping> {
    let raw = match language {
        MappingLanguage::English => MAPPING_EN,
        MappingLanguage::Portuguese => MAPPING_PT,
    };
    let entries: IndexMap<String, String> =
        serde_json::from_str(raw).map_err(|source| MappingError::Malformed { language, source })?;
    if entries.is_empty() {
        return Err(MappingError::Empty { language });
    }
    Ok(ColumnMapping { language, entries })
}
