#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod listing;
mod parsing;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultSinanClient, SinanClient};

// Configuration
pub use config::{BASE_URL_ENV, SinanClientConfig};

// Errors
pub use error::{SinanError, SinanResult};

// HTTP backend seam (for wiring custom transports in tests)
pub use http::HttpBackend;

// Listing entries
pub use listing::ListingEntry;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
