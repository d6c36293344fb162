//! Disease identifiers for the SINAN arbovirus datasets.
//!
//! SINAN publishes one dataset family per disease, keyed by a four-letter
//! code (`DENG`, `ZIKA`, `CHIK`). These codes appear in dataset filenames
//! and are what users pass on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The arboviruses covered by the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disease {
    Dengue,
    Zika,
    Chikungunya,
}

/// Error returned when a disease code or name cannot be recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid disease '{input}': only DENG, ZIKA and CHIK are allowed")]
pub struct InvalidDisease {
    /// The rejected input.
    pub input: String,
}

impl Disease {
    /// All supported diseases, in dataset-code order.
    pub const ALL: [Self; 3] = [Self::Dengue, Self::Zika, Self::Chikungunya];

    /// The four-letter SINAN dataset code (`DENG`, `ZIKA`, `CHIK`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dengue => "DENG",
            Self::Zika => "ZIKA",
            Self::Chikungunya => "CHIK",
        }
    }

    /// Lowercase human name (`dengue`, `zika`, `chikungunya`).
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dengue => "dengue",
            Self::Zika => "zika",
            Self::Chikungunya => "chikungunya",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Disease {
    type Err = InvalidDisease;

    /// Accepts the dataset code or the human name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DENG" | "DENGUE" => Ok(Self::Dengue),
            "ZIKA" => Ok(Self::Zika),
            "CHIK" | "CHIKUNGUNYA" => Ok(Self::Chikungunya),
            _ => Err(InvalidDisease {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for disease in Disease::ALL {
            assert_eq!(disease.code().parse::<Disease>().unwrap(), disease);
        }
    }

    #[test]
    fn parse_accepts_names_case_insensitively() {
        assert_eq!("dengue".parse::<Disease>().unwrap(), Disease::Dengue);
        assert_eq!("Chikungunya".parse::<Disease>().unwrap(), Disease::Chikungunya);
        assert_eq!("zika".parse::<Disease>().unwrap(), Disease::Zika);
        assert_eq!(" chik ".parse::<Disease>().unwrap(), Disease::Chikungunya);
    }

    #[test]
    fn parse_rejects_unknown_disease() {
        let err = "MALARIA".parse::<Disease>().unwrap_err();
        assert_eq!(err.input, "MALARIA");
        assert!(err.to_string().contains("only DENG, ZIKA and CHIK"));
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(Disease::Dengue.to_string(), "dengue");
    }
}
