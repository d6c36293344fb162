#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod error;
pub mod setup;
pub mod store;

pub use error::{StoreError, StoreResult};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

pub use store::{IngestedFile, SinanStore};
