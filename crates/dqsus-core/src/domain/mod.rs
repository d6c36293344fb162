//! Core domain types shared by the whole workspace.

mod dataset;
mod disease;
mod tables;

pub use dataset::{DATASET_EXTENSION, DatasetFile, filename, parse_year};
pub use disease::{Disease, InvalidDisease};
pub use tables::{NOTIFICATION_KEY, STAGING_TABLE, ThemedTable, UnknownTable};
