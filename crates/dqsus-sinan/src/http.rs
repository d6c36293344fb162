//! HTTP backend abstraction for the mirror.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with automatic retry logic for transient errors.

use async_trait::async_trait;
use dqsus_core::Disease;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::error::{SinanError, SinanResult};
use crate::listing::SinanConfig;
use crate::url::LISTING_FILE;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SinanResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx)
/// and network errors. A 404 is mapped to the typed not-found error for
/// the listing or dataset the URL points at.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &SinanConfig) -> SinanResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> SinanResult<reqwest::Response> {
        let mut last_error: Option<SinanError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(SinanError::RequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    // 404 is a special case
                    if status.as_u16() == 404 {
                        if let Some(missing) = classify_missing(url.path()) {
                            return Err(missing);
                        }
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(SinanError::RequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| SinanError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Map a 404 path onto the typed not-found error it stands for.
fn classify_missing(path: &str) -> Option<SinanError> {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let last = segments.next()?;

    if last == LISTING_FILE {
        let disease = segments.next()?.parse::<Disease>().ok()?;
        return Some(SinanError::ListingNotFound { disease });
    }

    let year = dqsus_core::parse_year(last)?;
    let disease = last.get(..4)?.parse::<Disease>().ok()?;
    Some(SinanError::DatasetNotFound { disease, year })
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> SinanResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
