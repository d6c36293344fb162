//! Internal error types for mirror catalog operations.

use dqsus_core::Disease;
use thiserror::Error;

/// Result type alias for mirror catalog operations.
pub type SinanResult<T> = Result<T, SinanError>;

/// Errors related to SINAN mirror operations.
#[derive(Debug, Error)]
pub enum SinanError {
    /// Mirror request failed with an HTTP error status.
    #[error("SINAN mirror request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Mirror returned an invalid or unexpected response.
    #[error("Invalid response from SINAN mirror: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No dataset is published for the disease/year pair.
    #[error("No {disease} dataset published for {year}")]
    DatasetNotFound {
        /// Disease that was looked up
        disease: Disease,
        /// Year that was looked up
        year: u16,
    },

    /// The mirror has no listing for the disease at all.
    #[error("No listing for {disease} on the mirror")]
    ListingNotFound {
        /// Disease whose listing is missing
        disease: Disease,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_names_status_and_url() {
        let error = SinanError::RequestFailed {
            status: 503,
            url: "https://mirror.example/DENG/files.json".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("files.json"));
    }

    #[test]
    fn dataset_not_found_names_disease_and_year() {
        let error = SinanError::DatasetNotFound {
            disease: Disease::Zika,
            year: 2019,
        };
        let msg = error.to_string();
        assert!(msg.contains("zika"));
        assert!(msg.contains("2019"));
    }

    #[test]
    fn listing_not_found_names_disease() {
        let error = SinanError::ListingNotFound {
            disease: Disease::Chikungunya,
        };
        assert!(error.to_string().contains("chikungunya"));
    }

    #[test]
    fn invalid_response_carries_message() {
        let error = SinanError::InvalidResponse {
            message: "listing is not an array".to_string(),
        };
        assert!(error.to_string().contains("not an array"));
    }
}
