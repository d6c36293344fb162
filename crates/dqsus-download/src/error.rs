//! Fetch error types.
//!
//! Every variant names the dataset file it happened on, so a failed
//! batch always points at the culprit.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while fetching dataset files.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The mirror answered with an HTTP error status.
    #[error("Fetching {file} failed with status {status}")]
    RequestFailed {
        /// Dataset filename
        file: String,
        /// HTTP status code
        status: u16,
    },

    /// Network error while requesting or streaming the file.
    #[error("Network error while fetching {file}")]
    Network {
        /// Dataset filename
        file: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Filesystem error while writing the download.
    #[error("I/O error while fetching {file} at {}", path.display())]
    Io {
        /// Dataset filename
        file: String,
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_names_the_file() {
        let error = FetchError::RequestFailed {
            file: "DENGBR23.csv".to_string(),
            status: 502,
        };
        let msg = error.to_string();
        assert!(msg.contains("DENGBR23.csv"));
        assert!(msg.contains("502"));
    }

    #[test]
    fn io_error_names_file_and_path() {
        let error = FetchError::Io {
            file: "ZIKABR16.csv".to_string(),
            path: PathBuf::from("/data/raw/ZIKA/ZIKABR16.csv.part"),
            source: std::io::Error::other("disk full"),
        };
        let msg = error.to_string();
        assert!(msg.contains("ZIKABR16.csv"));
        assert!(msg.contains(".part"));
    }
}
