//! The chain-data collaborator boundary.
//!
//! `BalanceProvider` is the seam the orchestrator and HTTP API depend on;
//! `MoralisProvider` is the production implementation. The provider is a
//! pure read; it never mutates chain state.

pub mod error;
pub mod moralis;

pub use error::ProviderError;
pub use moralis::MoralisProvider;

use async_trait::async_trait;
use cinder_types::{ChainAddress, TokenBalance};

/// Fetches the fungible-token balances an owner holds.
///
/// Implementations must exclude the chain's native coin and its wrapped
/// representation from the result; everything else, including zero
/// balances, is returned as-is.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    async fn fetch(&self, owner: &ChainAddress) -> Result<Vec<TokenBalance>, ProviderError>;
}
