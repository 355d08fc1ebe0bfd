//! Burn orchestration core.
//!
//! Turns a raw balance feed into a filtered, user-adjustable selection and
//! executes a batch of independent on-chain transfers to the dead address,
//! with per-token failure isolation and transient user feedback.
//!
//! The pieces, leaves first:
//! - [`SelectionStore`]: which discovered tokens are chosen for burning
//! - [`NotificationQueue`]: at most one transient, auto-expiring message
//! - [`TransferSubmitter`]: the transaction-submission collaborator seam
//! - [`BurnOrchestrator`]: the state machine driving
//!   fetch → display → burn → refresh

pub mod error;
pub mod event;
pub mod notify;
pub mod orchestrator;
pub mod selection;
pub mod submitter;

pub use error::{BurnError, SelectionError};
pub use event::{BurnerEvent, EventBus};
pub use notify::{Notification, NotificationKind, NotificationQueue, NOTIFICATION_TTL_SECS};
pub use orchestrator::{BatchReport, BurnOrchestrator, BurnOutcome, BurnerState};
pub use selection::SelectionStore;
pub use submitter::{TransferError, TransferSubmitter, TxHash};
