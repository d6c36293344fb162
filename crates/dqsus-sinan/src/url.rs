//! URL construction helpers for the mirror.
//!
//! Pure functions for building mirror URLs, ensuring consistent URL
//! construction across all requests.

use dqsus_core::{DatasetFile, Disease};
use url::Url;

use crate::listing::SinanConfig;

/// Filename of the per-disease listing document.
pub const LISTING_FILE: &str = "files.json";

/// Build the URL of a disease's listing document.
pub fn build_listing_url(config: &SinanConfig, disease: Disease) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}/{LISTING_FILE}", disease.code()));
    url
}

/// Build the download URL of a dataset file.
pub fn build_dataset_url(config: &SinanConfig, file: &DatasetFile) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}/{}", file.disease.code(), file.name));
    url
}
