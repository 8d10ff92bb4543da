// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic single-slot trailing-edge debounce.
//!
//! The debounce owns no clock and no thread: hosts pass timestamps as plain
//! `u64` milliseconds and decide when to call [`Debounce::poll`]. Each
//! [`Debounce::schedule`] replaces whatever was pending, so at most one
//! payload is ever live per instance and a replaced payload can never fire —
//! there is no stale-timer window to guard against.
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_model::debounce::Debounce;
//!
//! let mut debounce = Debounce::new();
//!
//! debounce.schedule(0, 1_000, "a");
//! debounce.schedule(600, 1_000, "b"); // replaces "a"
//!
//! assert_eq!(debounce.poll(1_599), None);
//! assert_eq!(debounce.poll(1_600), Some("b"));
//! assert_eq!(debounce.poll(5_000), None); // fired once, slot is empty
//! ```

/// Single-slot trailing-edge timer with a host-provided millisecond clock.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    slot: Option<(u64, T)>,
}

impl<T> Debounce<T> {
    /// Creates an empty debounce with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Schedules `payload` to fire at `now_ms + delay_ms`.
    ///
    /// Replaces any previously pending payload; the replaced payload is
    /// dropped and will never be returned by [`Debounce::poll`].
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) {
        self.slot = Some((now_ms.saturating_add(delay_ms), payload));
    }

    /// Takes the pending payload if its deadline has been reached.
    ///
    /// Returns `None` while nothing is due. After a payload is returned the
    /// slot is empty until the next [`Debounce::schedule`].
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.slot {
            Some((deadline, _)) if now_ms >= deadline => {
                self.slot.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }

    /// Discards any pending payload.
    ///
    /// Used at teardown so nothing fires after the owner is gone.
    pub fn cancel(&mut self) {
        self.slot = None;
    }

    /// Returns `true` while a payload is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// The deadline of the pending payload, if any.
    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.slot.as_ref().map(|(deadline, _)| *deadline)
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new()
    }
}
