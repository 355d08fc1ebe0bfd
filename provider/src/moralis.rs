//! Moralis-backed balance provider.

use crate::error::ProviderError;
use crate::BalanceProvider;
use async_trait::async_trait;
use cinder_types::{ChainAddress, Network, TokenBalance};
use std::sync::OnceLock;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://deep-index.moralis.io/api/v2.2";

/// Process-wide HTTP client, initialized exactly once.
///
/// Concurrent first use cannot double-initialize: `OnceLock` serializes
/// initialization, unlike a boolean-flag singleton.
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("default reqwest client configuration is valid")
    })
}

/// Queries the Moralis wallet-token-balances endpoint and normalizes the
/// result: addresses lowercased, balances parsed as raw integers, and the
/// network's wrapped-native token removed.
pub struct MoralisProvider {
    api_key: Option<String>,
    network: Network,
    base_url: String,
}

impl MoralisProvider {
    /// Create a provider. `api_key` may be absent; every fetch then fails
    /// with [`ProviderError::Unavailable`], surfaced per request rather
    /// than at startup.
    pub fn new(api_key: Option<String>, network: Network) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            network,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the upstream base URL (local stub servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Drop the native/wrapped-native entry from a raw balance list.
    ///
    /// Addresses are normalized at parse time, so the comparison is
    /// case-insensitive regardless of how the upstream formats them.
    fn normalize(&self, raw: Vec<TokenBalance>) -> Vec<TokenBalance> {
        let wrapped = self.network.wrapped_native();
        raw.into_iter().filter(|t| t.address != wrapped).collect()
    }
}

#[async_trait]
impl BalanceProvider for MoralisProvider {
    async fn fetch(&self, owner: &ChainAddress) -> Result<Vec<TokenBalance>, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::Unavailable)?;

        let url = format!("{}/{}/erc20", self.base_url, owner);
        let response = http_client()
            .get(&url)
            .query(&[("chain", self.network.chain_id_hex())])
            .header("X-API-Key", api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http(format!(
                "upstream returned HTTP {status}"
            )));
        }

        let raw: Vec<TokenBalance> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let tokens = self.normalize(raw);
        tracing::debug!(owner = %owner, count = tokens.len(), "fetched token balances");
        Ok(tokens)
    }
}
