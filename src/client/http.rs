//! HTTP transport for JSON-RPC providers.

use std::time::Duration;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use reqwest::{Client, Url};

use crate::constants::RPC_TIMEOUT;
use crate::domain::BridgeError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: RPC_TIMEOUT,
        }
    }
}

// ============================================================================
// Provider Construction
// ============================================================================

/// Connects a type-erased provider to `url` with default configuration.
///
/// # Errors
///
/// Returns an error if the URL does not parse or the HTTP client cannot be
/// built.
pub fn connect_http(url: &str) -> Result<DynProvider, BridgeError> {
    connect_http_with_config(url, &HttpConfig::default())
}

/// Connects a type-erased provider to `url`.
///
/// No request is made until the provider is first used.
///
/// # Errors
///
/// Returns an error if the URL does not parse or the HTTP client cannot be
/// built.
pub fn connect_http_with_config(
    url: &str,
    config: &HttpConfig,
) -> Result<DynProvider, BridgeError> {
    let url: Url = url
        .parse()
        .map_err(|e| BridgeError::invalid_input(format!("invalid RPC URL '{url}': {e}")))?;
    let client = Client::builder().timeout(config.timeout).build()?;

    tracing::debug!("rpc provider for {url}");
    let is_local = is_local_url(&url);
    let rpc = RpcClient::new(Http::with_client(client, url), is_local);
    Ok(ProviderBuilder::new().connect_client(rpc).erased())
}

/// Local nodes get the short polling interval.
fn is_local_url(url: &Url) -> bool {
    matches!(url.host_str(), Some("localhost" | "127.0.0.1"))
}

// ============================================================================
// Tests
// ============================================================================
