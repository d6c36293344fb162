//! Client for the SINAN mirror catalog.
//!
//! Provides the main interface for discovering which dataset files the
//! mirror publishes per disease.

mod catalog;

use url::Url;

use crate::config::SinanClientConfig;
use crate::error::SinanResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::listing::SinanConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default mirror client using the reqwest HTTP backend.
pub type DefaultSinanClient = SinanClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the SINAN mirror catalog.
///
/// Generic over an HTTP backend, allowing for easy testing. Use
/// `DefaultSinanClient` for production code.
pub struct SinanClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: SinanConfig,
}

impl DefaultSinanClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &SinanClientConfig) -> SinanResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> SinanResult<Self> {
        Self::new(&SinanClientConfig::default())
    }

    fn to_internal_config(config: &SinanClientConfig) -> SinanResult<SinanConfig> {
        Ok(SinanConfig {
            base_url: Url::parse(&config.base_url)?,
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // delays are far below u64 millis
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        })
    }
}

impl<B: HttpBackend> SinanClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: SinanConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
