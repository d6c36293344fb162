#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod fetcher;
mod progress;

// ============================================================================
// Public API
// ============================================================================

pub use config::FetchConfig;
pub use error::{FetchError, FetchResult};
pub use fetcher::{DatasetFetcher, FetchRequest, FetchedDataset};
pub use progress::{ProgressFn, ProgressThrottle};
