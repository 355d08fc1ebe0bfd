//! Transient user notifications.
//!
//! At most one notification is live at a time. A push replaces the current
//! value and restarts its expiry deadline, so during a burn batch only the
//! most recent per-token message is guaranteed a full display window: an
//! accepted product tradeoff.

use cinder_types::Timestamp;

/// How long a notification stays visible unless superseded.
pub const NOTIFICATION_TTL_SECS: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// An expiring value: message plus its creation and expiry instants.
/// Superseding it (via [`NotificationQueue::push`]) cancels the old
/// deadline implicitly; the value is simply replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Notification {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Holds the single live notification. Expiry is poll-based: [`current`]
/// hides the value once its deadline passes, so hosts that render on a
/// tick need no callback scheduling.
///
/// [`current`]: NotificationQueue::current
#[derive(Debug, Default)]
pub struct NotificationQueue {
    live: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any live notification and restart the expiry window.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: Timestamp) {
        self.live = Some(Notification {
            message: message.into(),
            kind,
            created_at: now,
            expires_at: now.add_secs(NOTIFICATION_TTL_SECS),
        });
    }

    /// The live notification, if any and not yet expired.
    pub fn current(&self, now: Timestamp) -> Option<&Notification> {
        self.live.as_ref().filter(|n| !n.is_expired(now))
    }

    pub fn clear(&mut self) {
        self.live = None;
    }
}
