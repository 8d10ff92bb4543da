// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validation gate: explicit commits and staleness.
//!
//! Live edits never reach renderers directly. The gate holds the last
//! *committed* snapshot of both dimension sets and only replaces it on an
//! explicit, successful [`ValidationGate::commit`]. A refused commit is not
//! an error — the gate is a predicate, and the previous snapshot (if any)
//! keeps serving renderers until the next successful commit.
//!
//! A revision counter bumps on every accepted commit so consumers can detect
//! new snapshots without comparing contents.

use crate::room::RoomDimensions;
use crate::screen::ScreenDimensions;

/// Immutable pair of committed dimension sets; the sole renderer input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CommittedSnapshot {
    /// Screen measurements at commit time.
    pub screen: ScreenDimensions,
    /// Room measurements at commit time.
    pub room: RoomDimensions,
}

/// Holds committed snapshots and tracks staleness of the live state.
#[derive(Clone, Debug, Default)]
pub struct ValidationGate {
    committed: Option<CommittedSnapshot>,
    stale: bool,
    revision: u64,
}

impl ValidationGate {
    /// Creates a gate with no committed snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to freeze the live state into a committed snapshot.
    ///
    /// Accepted only if every one of the seven numeric fields is strictly
    /// positive. On acceptance the snapshot becomes visible to renderers,
    /// staleness clears, and the revision bumps. On refusal nothing changes
    /// and no error is raised.
    pub fn commit(&mut self, screen: ScreenDimensions, room: RoomDimensions) -> bool {
        if !screen.is_complete() || !room.is_complete() {
            return false;
        }
        self.committed = Some(CommittedSnapshot { screen, room });
        self.stale = false;
        self.revision += 1;
        true
    }

    /// Records that a live field changed since the last commit.
    ///
    /// The committed snapshot is retained; renderers keep showing the last
    /// valid geometry until the next successful commit.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// The last committed snapshot, if any commit has succeeded.
    #[must_use]
    pub fn snapshot(&self) -> Option<&CommittedSnapshot> {
        self.committed.as_ref()
    }

    /// Returns `true` once any commit has succeeded.
    #[must_use]
    pub fn has_been_validated(&self) -> bool {
        self.committed.is_some()
    }

    /// Returns `true` while live edits postdate the committed snapshot.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Monotonic counter, bumped on every accepted commit.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
