//! Internal config and mirror listing types.
//!
//! These types are internal to `dqsus-sinan`; consumers work with
//! `dqsus_core::DatasetFile` values produced by the client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DEFAULT_BASE_URL;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the mirror client.
#[derive(Debug, Clone)]
pub struct SinanConfig {
    /// Base URL for the mirror
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for transient errors (default: 3)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

impl Default for SinanConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default mirror URL is valid"),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay_ms: 500,
        }
    }
}

// ============================================================================
// Listing Entry
// ============================================================================

/// One entry in a disease's `files.json` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Filename as served by the mirror (e.g. `DENGBR23.csv`).
    pub name: String,
    /// File size in bytes, when the mirror reports it.
    #[serde(default)]
    pub size: Option<u64>,
}

impl ListingEntry {
    /// Build an entry from a bare filename.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }
}
