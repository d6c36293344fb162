//! Fetcher configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the dataset fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Directory the per-disease cache lives under.
    pub raw_dir: PathBuf,
    /// Re-download files that are already cached.
    pub force: bool,
    /// Minimum interval between progress reports per file.
    pub progress_interval: Duration,
}

impl FetchConfig {
    /// Configuration with the default progress interval.
    #[must_use]
    pub fn new(raw_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            force: false,
            progress_interval: Duration::from_millis(100),
        }
    }

    /// Re-download files even when they are already cached.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Override the minimum interval between progress reports.
    #[must_use]
    pub const fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let config = FetchConfig::new("/data/raw");
        assert!(!config.force);
        assert_eq!(config.progress_interval, Duration::from_millis(100));
        assert_eq!(config.raw_dir, PathBuf::from("/data/raw"));
    }

    #[test]
    fn builders_override_fields() {
        let config = FetchConfig::new("/data/raw")
            .with_force(true)
            .with_progress_interval(Duration::from_secs(1));
        assert!(config.force);
        assert_eq!(config.progress_interval, Duration::from_secs(1));
    }
}
