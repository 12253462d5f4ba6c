//! Toast notification state

use std::time::{Duration, Instant};

/// Notification flavour, used to pick the background colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Animation phase of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Waiting off-screen before sliding in
    Pending,
    /// Sliding in from the right edge
    Entering,
    /// Fully shown
    Visible,
    /// Sliding back out
    Leaving,
    /// Gone; safe to drop
    Dismissed,
}

/// A transient message shown in the top-right corner
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
    /// How long after `shown_at` the notification starts leaving
    pub display_duration: Duration,
}

impl Notification {
    /// Delay before the slide-in starts
    const ENTER_DELAY: Duration = Duration::from_millis(100);
    /// Duration of each slide transition
    const SLIDE_DURATION: Duration = Duration::from_millis(300);

    pub fn new(message: impl Into<String>, kind: NotificationKind, display_duration: Duration) -> Self {
        Self::shown_at(message, kind, display_duration, Instant::now())
    }

    pub fn shown_at(
        message: impl Into<String>,
        kind: NotificationKind,
        display_duration: Duration,
        shown_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
            display_duration,
        }
    }

    pub fn phase(&self, now: Instant) -> NotificationPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let enter_end = Self::ENTER_DELAY + Self::SLIDE_DURATION;
        let leave_end = self.display_duration + Self::SLIDE_DURATION;

        if elapsed >= leave_end {
            NotificationPhase::Dismissed
        } else if elapsed >= self.display_duration {
            NotificationPhase::Leaving
        } else if elapsed < Self::ENTER_DELAY {
            NotificationPhase::Pending
        } else if elapsed < enter_end {
            NotificationPhase::Entering
        } else {
            NotificationPhase::Visible
        }
    }

    /// Horizontal slide offset as a fraction of the toast width.
    ///
    /// `1.0` is fully off-screen to the right, `0.0` fully shown.
    pub fn slide_offset(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let slide = Self::SLIDE_DURATION.as_secs_f32();

        match self.phase(now) {
            NotificationPhase::Pending | NotificationPhase::Dismissed => 1.0,
            NotificationPhase::Visible => 0.0,
            NotificationPhase::Entering => {
                let progress = (elapsed - Self::ENTER_DELAY).as_secs_f32() / slide;
                1.0 - simple_easing::cubic_out(progress.clamp(0.0, 1.0))
            }
            NotificationPhase::Leaving => {
                let progress = (elapsed - self.display_duration).as_secs_f32() / slide;
                simple_easing::cubic_in(progress.clamp(0.0, 1.0))
            }
        }
    }

    pub fn is_dismissed(&self, now: Instant) -> bool {
        self.phase(now) == NotificationPhase::Dismissed
    }
}
