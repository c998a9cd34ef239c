//! Shared scroll lock for modal popups.
//!
//! While a popup is open the background page must not scroll; when the last
//! popup closes, the view must land exactly where it was before the first
//! one opened. The lock is a service object handed to every popup rather
//! than ambient state, so the nesting rule lives in one place.
//!
//! Nesting policy: `disable` while already locked is a no-op that keeps the
//! originally saved offsets, and a single `enable` releases the lock and
//! returns those offsets. This is what lets one popup hand off to another
//! without the page jumping.
//!
//! # Example
//!
//! ```rust
//! use clubdeck_ui::scroll_lock::{Offset, ScrollLock};
//!
//! let lock = ScrollLock::new();
//! assert!(lock.disable(Offset::new(0, 120)));
//! assert!(!lock.disable(Offset::new(0, 999))); // nested open: offsets kept
//! assert_eq!(lock.enable(), Some(Offset::new(0, 120)));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

/// A scroll position (horizontal, vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    /// Horizontal scroll offset.
    pub x: u32,
    /// Vertical scroll offset.
    pub y: u32,
}

impl Offset {
    /// Creates an offset.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Default)]
struct State {
    /// Offsets captured by the `disable` call that took the lock.
    saved: Option<Offset>,
}

/// Process-wide scroll lock service.
///
/// Clone the [`SharedScrollLock`] handle into every popup that needs it;
/// components must go through [`disable`](ScrollLock::disable) and
/// [`enable`](ScrollLock::enable) only.
#[derive(Debug, Default)]
pub struct ScrollLock {
    inner: Mutex<State>,
}

/// Shared handle to a [`ScrollLock`].
pub type SharedScrollLock = Arc<ScrollLock>;

impl ScrollLock {
    /// Creates an unlocked scroll lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shareable handle to a fresh lock.
    #[must_use]
    pub fn shared() -> SharedScrollLock {
        Arc::new(Self::new())
    }

    /// Locks scrolling, capturing `current` for the eventual restore.
    ///
    /// Returns `true` if this call took the lock. When already locked the
    /// call is a no-op and the originally saved offsets are kept.
    pub fn disable(&self, current: Offset) -> bool {
        let mut state = self.inner.lock();
        if state.saved.is_some() {
            return false;
        }
        state.saved = Some(current);
        true
    }

    /// Unlocks scrolling and returns the offsets to restore.
    ///
    /// Returns `None` if the lock was not held.
    pub fn enable(&self) -> Option<Offset> {
        self.inner.lock().saved.take()
    }

    /// Returns whether scrolling is currently locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.lock().saved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_restores_position() {
        let lock = ScrollLock::new();
        let before = Offset::new(12, 340);

        assert!(lock.disable(before));
        assert!(lock.is_locked());
        assert_eq!(lock.enable(), Some(before));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_nested_disable_keeps_original_offsets() {
        let lock = ScrollLock::new();

        assert!(lock.disable(Offset::new(0, 100)));
        // A cooperating popup opening on top must not clobber the save.
        assert!(!lock.disable(Offset::new(0, 0)));
        assert!(lock.is_locked());

        assert_eq!(lock.enable(), Some(Offset::new(0, 100)));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_enable_without_lock_is_none() {
        let lock = ScrollLock::new();
        assert_eq!(lock.enable(), None);
    }

    #[test]
    fn test_relock_after_release() {
        let lock = ScrollLock::new();
        lock.disable(Offset::new(0, 10));
        lock.enable();

        assert!(lock.disable(Offset::new(0, 20)));
        assert_eq!(lock.enable(), Some(Offset::new(0, 20)));
    }

    #[test]
    fn test_shared_handle() {
        let lock = ScrollLock::shared();
        let other = Arc::clone(&lock);

        lock.disable(Offset::new(3, 4));
        assert!(other.is_locked());
        assert_eq!(other.enable(), Some(Offset::new(3, 4)));
    }
}
