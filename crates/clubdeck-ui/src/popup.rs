//! Modal popup state machine.
//!
//! A popup moves through `Closed -> Opening -> Open -> Closing -> Closed`.
//! The two animation delays from the stylesheet (a short beat between
//! unhiding and animating in, and the transition length before actually
//! hiding) become deferred transitions: [`open`](Popup::open) and
//! [`close`](Popup::close) hand the host a [`Pending`] to schedule, and the
//! host calls [`finish`](Popup::finish) when the delay elapses.
//!
//! Every pending transition carries a sequence tag. A `finish` with a stale
//! tag is ignored, so rapid open -> close -> open before the hide delay
//! fires ends in the `Open` state instead of flickering back to hidden.
//!
//! Scroll locking goes through the shared [`ScrollLock`] service. Opening
//! with [`LockMode::Transfer`] (or closing with [`CloseMode::Transfer`])
//! leaves the lock alone, which is how one popup hands off to another
//! without losing the saved scroll position.

use std::time::Duration;

use crate::scroll_lock::{Offset, SharedScrollLock};

/// Delay between unhiding a popup and starting its entrance animation.
pub const REVEAL_DELAY: Duration = Duration::from_millis(10);

/// Exit animation length; after this the popup is actually hidden.
pub const HIDE_DELAY: Duration = Duration::from_millis(200);

/// Lifecycle phase of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Hidden, not interactive.
    #[default]
    Closed,
    /// Unhidden, entrance animation pending.
    Opening,
    /// Fully visible and interactive.
    Open,
    /// Exit animation running, still rendered.
    Closing,
}

/// How an open acquires the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMode {
    /// Take the scroll lock (no-op if a cooperating popup already holds it).
    #[default]
    Acquire,
    /// Keep the lock exactly as it is; a cooperating popup holds it.
    Transfer,
}

/// What happens to the scroll lock when a close completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseMode {
    /// Release the lock and restore the saved scroll position.
    #[default]
    Release,
    /// Leave the lock held for a popup opening next.
    Transfer,
}

/// Which control receives focus once the popup is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialFocus {
    /// No explicit focus.
    #[default]
    None,
    /// First text input of the contained form.
    FirstInput,
    /// The cancel button; used for destructive confirmations.
    CancelButton,
}

/// Where a click landed relative to the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The popup root element (outside the dialog box).
    Root,
    /// An element tagged as backdrop.
    Backdrop,
    /// Inside the dialog content.
    Content,
}

/// A deferred transition for the host to schedule.
///
/// Call [`Popup::finish`] with `seq` after `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    /// Sequence tag; stale tags are rejected by `finish`.
    pub seq: u64,
    /// How long to wait before finishing the transition.
    pub delay: Duration,
}

/// Host-visible result of a completed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Entrance finished; apply the visible transform and move focus.
    Revealed {
        /// Control to focus.
        focus: InitialFocus,
    },
    /// Exit finished; the popup is hidden. The host resets the contained
    /// form and clears its messages. `restore` carries the scroll position
    /// to return to when the lock was released.
    Hidden {
        /// Scroll position to restore, if the lock was released.
        restore: Option<Offset>,
    },
}

/// Modal dialog state machine bound to a shared scroll lock.
#[derive(Debug, Clone)]
pub struct Popup {
    id: String,
    phase: Phase,
    seq: u64,
    initial_focus: InitialFocus,
    pending_close: CloseMode,
    lock: SharedScrollLock,
}

impl Popup {
    /// Creates a closed popup using the given scroll lock service.
    #[must_use]
    pub fn new(id: impl Into<String>, lock: SharedScrollLock) -> Self {
        Self {
            id: id.into(),
            phase: Phase::Closed,
            seq: 0,
            initial_focus: InitialFocus::None,
            pending_close: CloseMode::Release,
            lock,
        }
    }

    /// Sets the control focused once the popup is revealed.
    #[must_use]
    pub fn initial_focus(mut self, focus: InitialFocus) -> Self {
        self.initial_focus = focus;
        self
    }

    /// Returns the popup id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the popup is rendered (anything but `Closed`).
    ///
    /// Matches the "not hidden" check the close triggers use: an Opening or
    /// Closing popup still responds to Escape and backdrop clicks.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Returns whether the popup counts as open for interaction purposes.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Open)
    }

    /// Starts opening the popup.
    ///
    /// `scroll_at` is the current scroll position, saved by the lock for
    /// the eventual restore. Returns the entrance transition to schedule,
    /// or `None` if the popup is already open or opening.
    ///
    /// Opening while `Closing` supersedes the pending close: its tag goes
    /// stale, the scroll lock stays held, and the popup ends up `Open`.
    pub fn open(&mut self, scroll_at: Offset, mode: LockMode) -> Option<Pending> {
        if self.is_open() {
            return None;
        }
        if mode == LockMode::Acquire {
            self.lock.disable(scroll_at);
        }
        self.phase = Phase::Opening;
        self.pending_close = CloseMode::Release;
        self.seq += 1;
        Some(Pending {
            seq: self.seq,
            delay: REVEAL_DELAY,
        })
    }

    /// Starts closing the popup, releasing the scroll lock on completion.
    pub fn close(&mut self) -> Option<Pending> {
        self.close_with(CloseMode::Release)
    }

    /// Starts closing the popup with explicit lock handling.
    ///
    /// Returns the exit transition to schedule, or `None` if the popup is
    /// already closed or closing.
    pub fn close_with(&mut self, mode: CloseMode) -> Option<Pending> {
        if !self.is_open() {
            return None;
        }
        self.phase = Phase::Closing;
        self.pending_close = mode;
        self.seq += 1;
        Some(Pending {
            seq: self.seq,
            delay: HIDE_DELAY,
        })
    }

    /// Handles a click by target; root and backdrop clicks close the popup.
    pub fn click(&mut self, target: ClickTarget) -> Option<Pending> {
        match target {
            ClickTarget::Root | ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => None,
        }
    }

    /// Handles the Escape key; closes the popup if it is visible.
    pub fn escape(&mut self) -> Option<Pending> {
        if self.is_visible() { self.close() } else { None }
    }

    /// Completes the transition tagged `seq`.
    ///
    /// A stale tag (superseded by a newer open/close) is ignored and
    /// returns `None`.
    pub fn finish(&mut self, seq: u64) -> Option<Effect> {
        if seq != self.seq {
            return None;
        }
        match self.phase {
            Phase::Opening => {
                self.phase = Phase::Open;
                Some(Effect::Revealed {
                    focus: self.initial_focus,
                })
            }
            Phase::Closing => {
                self.phase = Phase::Closed;
                let restore = match self.pending_close {
                    CloseMode::Release => self.lock.enable(),
                    CloseMode::Transfer => None,
                };
                Some(Effect::Hidden { restore })
            }
            Phase::Closed | Phase::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::scroll_lock::ScrollLock;

    fn popup(id: &str) -> (Popup, SharedScrollLock) {
        let lock = ScrollLock::shared();
        (Popup::new(id, Arc::clone(&lock)), lock)
    }

    #[test]
    fn test_open_close_cycle() {
        let (mut p, lock) = popup("login-popup");
        let at = Offset::new(0, 250);

        let pending = p.open(at, LockMode::Acquire).unwrap();
        assert_eq!(pending.delay, REVEAL_DELAY);
        assert_eq!(p.phase(), Phase::Opening);
        assert!(lock.is_locked());

        assert_eq!(
            p.finish(pending.seq),
            Some(Effect::Revealed {
                focus: InitialFocus::None
            })
        );
        assert_eq!(p.phase(), Phase::Open);

        let pending = p.close().unwrap();
        assert_eq!(pending.delay, HIDE_DELAY);
        assert_eq!(p.phase(), Phase::Closing);
        // Lock released only once the hide delay completes.
        assert!(lock.is_locked());

        assert_eq!(p.finish(pending.seq), Some(Effect::Hidden { restore: Some(at) }));
        assert_eq!(p.phase(), Phase::Closed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_reopen_before_hide_delay_stays_open() {
        let (mut p, lock) = popup("login-popup");
        let at = Offset::new(0, 80);

        let open1 = p.open(at, LockMode::Acquire).unwrap();
        p.finish(open1.seq);

        let close = p.close().unwrap();
        let open2 = p.open(at, LockMode::Acquire).unwrap();

        // The close timer fires late; its tag is stale and must be ignored.
        assert_eq!(p.finish(close.seq), None);
        assert_eq!(p.phase(), Phase::Opening);
        assert!(lock.is_locked());

        p.finish(open2.seq);
        assert_eq!(p.phase(), Phase::Open);
        // Original scroll position still survives the whole sequence.
        let close2 = p.close().unwrap();
        assert_eq!(
            p.finish(close2.seq),
            Some(Effect::Hidden { restore: Some(at) })
        );
    }

    #[test]
    fn test_double_open_is_noop() {
        let (mut p, _lock) = popup("contact-popup");
        assert!(p.open(Offset::default(), LockMode::Acquire).is_some());
        assert!(p.open(Offset::default(), LockMode::Acquire).is_none());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let (mut p, _lock) = popup("contact-popup");
        assert!(p.close().is_none());
        assert!(p.escape().is_none());
    }

    #[test]
    fn test_handoff_preserves_scroll_position() {
        // Contact popup opened from inside the login popup: login closes
        // with a lock transfer, contact opens without re-acquiring, and
        // only the final close restores the original position.
        let lock = ScrollLock::shared();
        let mut login = Popup::new("login-popup", Arc::clone(&lock));
        let mut contact = Popup::new("contact-popup", Arc::clone(&lock));
        let at = Offset::new(0, 600);

        let open = login.open(at, LockMode::Acquire).unwrap();
        login.finish(open.seq);

        let close = login.close_with(CloseMode::Transfer).unwrap();
        assert_eq!(login.finish(close.seq), Some(Effect::Hidden { restore: None }));
        assert!(lock.is_locked());

        let open = contact.open(Offset::new(0, 0), LockMode::Transfer).unwrap();
        contact.finish(open.seq);

        let close = contact.close().unwrap();
        assert_eq!(
            contact.finish(close.seq),
            Some(Effect::Hidden { restore: Some(at) })
        );
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_backdrop_and_content_clicks() {
        let (mut p, _lock) = popup("delete-confirmation-popup");
        let open = p.open(Offset::default(), LockMode::Acquire).unwrap();
        p.finish(open.seq);

        assert!(p.click(ClickTarget::Content).is_none());
        assert_eq!(p.phase(), Phase::Open);

        assert!(p.click(ClickTarget::Backdrop).is_some());
        assert_eq!(p.phase(), Phase::Closing);
    }

    #[test]
    fn test_escape_closes_while_opening() {
        let (mut p, _lock) = popup("password-update-popup");
        p.open(Offset::default(), LockMode::Acquire);
        assert!(p.escape().is_some());
        assert_eq!(p.phase(), Phase::Closing);
    }

    #[test]
    fn test_initial_focus_reported_on_reveal() {
        let lock = ScrollLock::shared();
        let mut p =
            Popup::new("delete-confirmation-popup", lock).initial_focus(InitialFocus::CancelButton);
        let open = p.open(Offset::default(), LockMode::Acquire).unwrap();

        assert_eq!(
            p.finish(open.seq),
            Some(Effect::Revealed {
                focus: InitialFocus::CancelButton
            })
        );
    }

    #[test]
    fn test_stale_finish_after_reset_sequence() {
        let (mut p, _lock) = popup("login-popup");
        let open1 = p.open(Offset::default(), LockMode::Acquire).unwrap();
        let close = p.escape().unwrap();

        // Old open tag no longer applies.
        assert_eq!(p.finish(open1.seq), None);
        assert_eq!(p.phase(), Phase::Closing);
        assert!(p.finish(close.seq).is_some());
        assert_eq!(p.phase(), Phase::Closed);
    }
}
