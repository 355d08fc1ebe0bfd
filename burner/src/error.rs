//! Burn-core error types.

use crate::orchestrator::BurnerState;
use cinder_types::ChainAddress;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("token is not in the current balance list: {0}")]
    UnknownToken(ChainAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BurnError {
    /// A burn batch is already in flight; at most one runs per session.
    #[error("a burn batch is already in progress")]
    AlreadyBurning,

    /// Burn commands are only valid once balances are loaded.
    #[error("cannot burn in state {0:?}")]
    NotReady(BurnerState),

    /// No tokens are selected.
    #[error("no tokens selected")]
    NothingSelected,
}
