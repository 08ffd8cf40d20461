//! Transient status messages.
//!
//! At most one notification is visible. Showing a new one replaces the old
//! one and restarts the dismissal clock; every notification disappears
//! [`NOTIFICATION_TTL`] after it was shown.

use std::time::{Duration, Instant};

/// How long a notification stays visible
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    /// CSS-style class name for the shell
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    /// Identifies this particular showing; used to ignore stale timers
    pub ticket: u64,
    pub shown_at: Instant,
}

impl Notification {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + NOTIFICATION_TTL
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Holds the current notification, if any
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_ticket: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` now, replacing whatever is visible.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.show_at(message, kind, Instant::now())
    }

    /// Show `message` as of `now`. Returns the ticket for [`Self::dismiss`].
    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.current = Some(Notification {
            message: message.into(),
            kind,
            ticket,
            shown_at: now,
        });
        ticket
    }

    /// Clear the notification only if `ticket` still identifies it.
    ///
    /// Returns whether anything was cleared.
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.ticket == ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The notification visible at `now`
    pub fn visible_at(&self, now: Instant) -> Option<&Notification> {
        self.current.as_ref().filter(|n| !n.is_expired(now))
    }

    /// The notification visible right now
    pub fn visible(&self) -> Option<&Notification> {
        self.visible_at(Instant::now())
    }

    /// The most recently shown notification, ignoring expiry
    pub fn latest(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
