//! JSON-RPC provider shared by every contract read.

use crate::error::{ProtocolError, Result};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use tracing::info;

/// Public BNB Chain endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://bsc-dataseed.bnbchain.org";

/// RPC connection settings.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// HTTP JSON-RPC endpoint.
    pub url: String,
}

impl RpcConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RPC_URL)
    }
}

/// Long-lived, read-only handle to a node.
///
/// Built once and shared by `Arc`; nothing mutates it after creation.
pub struct RpcProvider {
    provider: DynProvider,
    url: String,
}

impl RpcProvider {
    /// Creates an HTTP provider for `config.url`.
    ///
    /// No request is sent here; an unreachable node only shows up on the
    /// first read.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidUrl`] when the URL does not parse.
    pub fn connect(config: &RpcConfig) -> Result<Self> {
        let url: Url = config
            .url
            .trim()
            .parse()
            .map_err(|e| ProtocolError::InvalidUrl(format!("{}: {}", config.url, e)))?;

        let provider = ProviderBuilder::new().connect_http(url).erased();
        info!(url = %config.url, "RPC provider ready");

        Ok(Self {
            provider,
            url: config.url.trim().to_string(),
        })
    }

    /// Provider answering from a queue of canned responses.
    #[cfg(test)]
    pub(crate) fn mocked(asserter: alloy::transports::mock::Asserter) -> Self {
        Self {
            provider: ProviderBuilder::new().connect_mocked_client(asserter).erased(),
            url: "mock".to_string(),
        }
    }

    /// Get provider reference
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
