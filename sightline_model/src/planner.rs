// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The planner façade: both panels and the gate behind one surface.
//!
//! Hosts (the form layer) talk to a [`Planner`] instead of wiring the screen
//! panel, the room panel, and the validation gate by hand. The planner
//! forwards change notifications into the gate as staleness, exposes the
//! explicit validate action, and hands the committed snapshot to renderers.
//!
//! Like the rest of the crate the planner is clockless: pass timestamps into
//! [`Planner::edit_screen_field`] and [`Planner::poll`], and call `poll` from
//! whatever cadence the host has (a frame tick is plenty).

use sightline_units::Unit;

use crate::aspect::AspectRatio;
use crate::gate::{CommittedSnapshot, ValidationGate};
use crate::room::{RoomDimensions, RoomField, RoomPanel};
use crate::screen::{EditOutcome, ScreenDimensions, ScreenField, ScreenPanel};

/// Owns the two edit panels and the validation gate.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    screen: ScreenPanel,
    room: RoomPanel,
    gate: ValidationGate,
}

impl Planner {
    /// Creates a planner with all-zero dimensions and nothing committed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one keystroke on a screen field; debounced.
    pub fn edit_screen_field(
        &mut self,
        field: ScreenField,
        raw: &str,
        now_ms: u64,
    ) -> EditOutcome {
        self.screen.edit_field(field, raw, now_ms)
    }

    /// Fires a due screen reconciliation, marking the live state stale.
    ///
    /// Returns the reconciled dimensions exactly once per debounce window,
    /// mirroring the screen panel's change notification.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScreenDimensions> {
        let dims = self.screen.poll(now_ms)?;
        self.gate.mark_stale();
        Some(dims)
    }

    /// Selects a new aspect ratio; recomputes immediately when possible.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) -> Option<ScreenDimensions> {
        let dims = self.screen.set_aspect_ratio(aspect)?;
        self.gate.mark_stale();
        Some(dims)
    }

    /// Selects the diagonal unit. Display-only; never marks staleness.
    pub fn set_unit(&mut self, unit: Unit) {
        self.screen.set_unit(unit);
    }

    /// Feeds one keystroke on a room field; synchronous.
    pub fn edit_room_field(&mut self, field: RoomField, raw: &str) -> Option<RoomDimensions> {
        let dims = self.room.edit_field(field, raw)?;
        self.gate.mark_stale();
        Some(dims)
    }

    /// The explicit validate/update action.
    ///
    /// Succeeds iff all seven live fields are strictly positive; see
    /// [`ValidationGate::commit`].
    pub fn validate(&mut self) -> bool {
        self.gate
            .commit(self.screen.dimensions(), self.room.dimensions())
    }

    /// The committed snapshot renderers consume, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&CommittedSnapshot> {
        self.gate.snapshot()
    }

    /// Read access to the screen edit session (projections, unit, ratio).
    #[must_use]
    pub fn screen(&self) -> &ScreenPanel {
        &self.screen
    }

    /// Read access to the room edit session.
    #[must_use]
    pub fn room(&self) -> &RoomPanel {
        &self.room
    }

    /// Returns `true` once any commit has succeeded.
    #[must_use]
    pub fn has_been_validated(&self) -> bool {
        self.gate.has_been_validated()
    }

    /// Returns `true` while live edits postdate the committed snapshot.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.gate.is_stale()
    }

    /// Snapshot revision; bumps on every accepted commit.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.gate.revision()
    }

    /// Discards any pending debounced edit; nothing fires afterwards.
    pub fn cancel_pending(&mut self) {
        self.screen.cancel_pending();
    }

    /// Snapshot of the live state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlannerDebugInfo {
        PlannerDebugInfo {
            screen: self.screen.dimensions(),
            room: self.room.dimensions(),
            aspect: self.screen.aspect_ratio(),
            unit: self.screen.unit(),
            pending_deadline_ms: self.screen.pending_deadline_ms(),
            has_been_validated: self.gate.has_been_validated(),
            is_stale: self.gate.is_stale(),
            revision: self.gate.revision(),
        }
    }
}

/// Debug snapshot of a [`Planner`]'s live state.
#[derive(Copy, Clone, Debug)]
pub struct PlannerDebugInfo {
    /// Live (possibly uncommitted) screen dimensions.
    pub screen: ScreenDimensions,
    /// Live (possibly uncommitted) room dimensions.
    pub room: RoomDimensions,
    /// Selected aspect ratio.
    pub aspect: AspectRatio,
    /// Selected diagonal unit.
    pub unit: Unit,
    /// Deadline of the pending debounced edit, if any.
    pub pending_deadline_ms: Option<u64>,
    /// Whether any commit has succeeded.
    pub has_been_validated: bool,
    /// Whether live edits postdate the committed snapshot.
    pub is_stale: bool,
    /// Snapshot revision counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_planner() -> Planner {
        let mut planner = Planner::new();
        planner.edit_screen_field(ScreenField::Diagonal, "139.7", 0);
        planner.poll(1_000).unwrap();
        planner.edit_room_field(RoomField::Width, "4").unwrap();
        planner.edit_room_field(RoomField::Depth, "5").unwrap();
        planner.edit_room_field(RoomField::Height, "2.438").unwrap();
        planner.edit_room_field(RoomField::MountHeight, "100").unwrap();
        planner
    }

    #[test]
    fn screen_staleness_arrives_with_the_debounce_not_the_keystroke() {
        let mut planner = filled_planner();
        assert!(planner.validate());
        assert!(!planner.is_stale());

        planner.edit_screen_field(ScreenField::Width, "130", 2_000);
        assert!(!planner.is_stale());

        planner.poll(3_000).unwrap();
        assert!(planner.is_stale());
    }

    #[test]
    fn room_edits_mark_stale_synchronously() {
        let mut planner = filled_planner();
        planner.validate();

        planner.edit_room_field(RoomField::Depth, "6").unwrap();
        assert!(planner.is_stale());
        // The committed snapshot still serves renderers.
        assert_eq!(planner.snapshot().unwrap().room.depth_cm, 500.0);
    }

    #[test]
    fn debug_info_reflects_live_state() {
        let mut planner = filled_planner();
        planner.edit_screen_field(ScreenField::Width, "120", 5_000);

        let info = planner.debug_info();
        assert_eq!(info.pending_deadline_ms, Some(6_000));
        assert!(!info.has_been_validated);
        assert_eq!(info.revision, 0);
    }
}
