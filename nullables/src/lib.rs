//! Nullable infrastructure for deterministic testing.
//!
//! The collaborator seams ([`BalanceProvider`], [`TransferSubmitter`]) are
//! traits; this crate provides programmable implementations that return
//! scripted values and never touch the network. Swap them in wherever a
//! test drives the orchestrator or the HTTP API.
//!
//! [`BalanceProvider`]: cinder_provider::BalanceProvider
//! [`TransferSubmitter`]: cinder_burner::TransferSubmitter

pub mod provider;
pub mod submitter;

pub use provider::NullBalanceProvider;
pub use submitter::{NullSubmitter, SubmittedTransfer};
