//! Provider error taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The upstream credential/service is not configured.
    #[error("balance provider is not configured (missing API key)")]
    Unavailable,

    /// Transport failure or non-success upstream status.
    #[error("balance provider request failed: {0}")]
    Http(String),

    /// The upstream responded but the payload could not be decoded.
    #[error("balance provider returned an invalid response: {0}")]
    Decode(String),
}
