// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `sightline_model` crate.
//!
//! These exercise the full edit → debounce → validate flow through the
//! `Planner` façade, with a focus on how the debounce clock, the
//! reconciliation, and the validation gate interact.

use sightline_model::aspect::AspectRatio;
use sightline_model::planner::Planner;
use sightline_model::room::RoomField;
use sightline_model::screen::{EditOutcome, ScreenField};
use sightline_units::Unit;

fn fill_room(planner: &mut Planner) {
    planner.edit_room_field(RoomField::Width, "4").unwrap();
    planner.edit_room_field(RoomField::Depth, "5").unwrap();
    planner.edit_room_field(RoomField::Height, "2.438").unwrap();
    planner.edit_room_field(RoomField::MountHeight, "100").unwrap();
}

#[test]
fn fresh_planner_has_nothing_committed() {
    let planner = Planner::new();
    assert!(planner.snapshot().is_none());
    assert!(!planner.has_been_validated());
    assert_eq!(planner.revision(), 0);
}

#[test]
fn keystroke_burst_commits_once_with_the_last_value() {
    let mut planner = Planner::new();

    // Four keystrokes inside one second; only the last survives, observable
    // exactly one second after it.
    for (t, text) in [(0, "1"), (200, "13"), (400, "139"), (600, "139.7")] {
        assert_eq!(
            planner.edit_screen_field(ScreenField::Diagonal, text, t),
            EditOutcome::Scheduled
        );
    }

    assert_eq!(planner.poll(1_599), None);
    let dims = planner.poll(1_600).expect("debounce fires at t = 1600");
    assert_eq!(dims.diagonal_cm, 139.7);
    assert!((dims.width_cm - 121.8).abs() < 0.1);
    assert!((dims.height_cm - 68.5).abs() < 0.1);
    assert_eq!(planner.poll(2_000), None);
}

#[test]
fn validate_requires_all_seven_positive_fields() {
    let mut planner = Planner::new();
    fill_room(&mut planner);

    // Screen still {0, 0, 0}: the gate must refuse and keep nothing.
    assert!(!planner.validate());
    assert!(planner.snapshot().is_none());

    planner.edit_screen_field(ScreenField::Diagonal, "139.7", 0);
    planner.poll(1_000).unwrap();
    assert!(planner.validate());

    let snapshot = planner.snapshot().unwrap();
    assert_eq!(snapshot.room.height_cm, 243.8);
    assert_eq!(snapshot.screen.diagonal_cm, 139.7);
}

#[test]
fn failed_revalidation_keeps_the_old_snapshot_serving() {
    let mut planner = Planner::new();
    fill_room(&mut planner);
    planner.edit_screen_field(ScreenField::Diagonal, "139.7", 0);
    planner.poll(1_000).unwrap();
    assert!(planner.validate());
    let revision = planner.revision();

    // Clear the diagonal, let it reconcile to zero, then try to validate.
    planner.edit_screen_field(ScreenField::Diagonal, "", 2_000);
    planner.poll(3_000).unwrap();
    assert!(!planner.validate());

    let snapshot = planner.snapshot().unwrap();
    assert_eq!(snapshot.screen.diagonal_cm, 139.7);
    assert_eq!(planner.revision(), revision);
    assert!(planner.is_stale());
}

#[test]
fn imperial_entry_and_metric_storage_agree() {
    let mut planner = Planner::new();
    planner.set_unit(Unit::Imperial);
    planner.edit_screen_field(ScreenField::Diagonal, "55", 0);
    let dims = planner.poll(1_000).unwrap();

    // Stored in centimeters regardless of the entry unit.
    assert!((dims.diagonal_cm - 139.7).abs() < 1e-9);
    assert_eq!(planner.screen().display_value(ScreenField::Diagonal), 55.0);

    planner.set_unit(Unit::Metric);
    assert_eq!(planner.screen().display_value(ScreenField::Diagonal), 139.7);
    // A unit toggle alone is a projection change, not an edit.
    assert!(!planner.is_stale());
}

#[test]
fn aspect_ratio_change_bypasses_the_debounce() {
    let mut planner = Planner::new();
    planner.edit_screen_field(ScreenField::Diagonal, "139.7", 0);
    planner.poll(1_000).unwrap();

    let dims = planner.set_aspect_ratio(AspectRatio::TwentyOneNine).unwrap();
    assert_eq!(dims.diagonal_cm, 139.7);
    assert!((dims.width_cm / dims.height_cm - 21.0 / 9.0).abs() < 1e-9);
    assert!(planner.is_stale());
}

#[test]
fn teardown_discards_pending_work() {
    let mut planner = Planner::new();
    planner.edit_screen_field(ScreenField::Width, "120", 0);
    planner.cancel_pending();

    assert_eq!(planner.poll(10_000), None);
    assert_eq!(planner.debug_info().pending_deadline_ms, None);
}
