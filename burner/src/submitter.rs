//! Transaction-submission collaborator seam.

use async_trait::async_trait;
use cinder_types::{ChainAddress, TokenAmount};
use std::fmt;
use thiserror::Error;

/// A broadcast transaction's hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One token's burn transaction failed. Isolated per token: a failure
/// never aborts the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The signer/transport rejected the transfer (user denial, revert,
    /// insufficient gas).
    #[error("transfer rejected: {0}")]
    Rejected(String),

    /// The transaction could not reach the chain.
    #[error("transfer transport failure: {0}")]
    Transport(String),
}

/// Submits a standard fungible-token `transfer(to, value)` call against
/// `token`'s own contract. The signing transport behind this trait is
/// outside the burn core.
#[async_trait]
pub trait TransferSubmitter: Send + Sync {
    async fn transfer(
        &self,
        token: &ChainAddress,
        to: &ChainAddress,
        value: TokenAmount,
    ) -> Result<TxHash, TransferError>;
}
