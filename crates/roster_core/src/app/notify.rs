//! Transient user notifications.
//!
//! # Responsibility
//! - Hold at most one banner message with a fixed lifetime.
//!
//! # Invariants
//! - A newer notice replaces the older one and restarts the lifetime
//!   window (last-write-wins on both message and deadline).
//! - Expiry is checked against a caller-supplied clock; no background task
//!   owns the dismissal.

use std::time::{Duration, Instant};

/// Visual flavor of a notice banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

/// Single-slot notice holder with deadline-based dismissal.
#[derive(Debug)]
pub struct NoticeSlot {
    ttl: Duration,
    current: Option<(Notice, Instant)>,
}

impl NoticeSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Replaces the current notice and restarts the lifetime window.
    pub fn raise(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) {
        let notice = Notice {
            text: text.into(),
            kind,
        };
        self.current = Some((notice, now + self.ttl));
    }

    /// Returns the active notice, dropping it once its deadline passed.
    pub fn current(&mut self, now: Instant) -> Option<&Notice> {
        if let Some((_, deadline)) = &self.current {
            if now >= *deadline {
                self.current = None;
            }
        }
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeKind, NoticeSlot};
    use std::time::{Duration, Instant};

    const TTL: Duration = Duration::from_secs(5);

    #[test]
    fn notice_expires_after_its_window() {
        let start = Instant::now();
        let mut slot = NoticeSlot::new(TTL);
        slot.raise(NoticeKind::Success, "saved", start);

        assert!(slot.current(start + Duration::from_secs(4)).is_some());
        assert!(slot.current(start + TTL).is_none());
        // Stays cleared on later polls.
        assert!(slot.current(start + Duration::from_secs(6)).is_none());
    }

    #[test]
    fn newer_notice_resets_the_window() {
        let start = Instant::now();
        let mut slot = NoticeSlot::new(TTL);
        slot.raise(NoticeKind::Error, "first", start);
        slot.raise(NoticeKind::Success, "second", start + Duration::from_secs(4));

        // Past the first deadline but inside the second.
        let notice = slot
            .current(start + Duration::from_secs(8))
            .expect("second notice should still be visible");
        assert_eq!(notice.text, "second");
        assert_eq!(notice.kind, NoticeKind::Success);

        assert!(slot.current(start + Duration::from_secs(9)).is_none());
    }
}
