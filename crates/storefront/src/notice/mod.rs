//! # Cart notice
//!
//! The transient "… added to cart" message. Posting a notice replaces the
//! current one and its expiry, so there is only ever one pending clear and a
//! notice is never cleared early by the expiry of the notice it replaced.
//!
//! The board does not run timers itself: the owner reads
//! [`NoticeBoard::deadline`] and calls [`NoticeBoard::expire`] once it passes.
//! Inside the storefront actor that is the actor loop's single deadline.

use std::time::Duration;
use tokio::time::Instant;

/// Default lifetime of a notice.
pub const NOTICE_TTL: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartNotice {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    current: Option<CartNotice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows `message` until `now + ttl`, replacing any current notice.
    pub fn post(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(CartNotice {
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// When the current notice should be cleared.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.expires_at)
    }

    /// Clears the notice if its expiry is at or before `now`. Returns whether
    /// anything was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notice) if notice.expires_at <= now => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
