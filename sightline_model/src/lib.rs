// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Model: headless dimension state for screen-in-room planning.
//!
//! This crate provides small, focused state machines for the numeric side of
//! a screen-placement planner. Each module handles one concern:
//!
//! - [`aspect`]: the fixed catalog of selectable aspect ratios
//! - [`screen`]: the three mutually dependent screen measurements and their
//!   single authoritative reconciliation, with a trailing debounce for
//!   keystroke-driven edits
//! - [`room`]: unit-normalized room dimensions (meters in, centimeters stored)
//! - [`gate`]: the explicit commit gate producing immutable snapshots for
//!   renderers, with staleness tracking
//! - [`debounce`]: a host-agnostic single-slot trailing-edge timer
//! - [`planner`]: a façade wiring the panels and the gate together
//!
//! ## Design philosophy
//!
//! The crate does not assume any UI framework, event loop, or clock. Hosts
//! feed in raw field text and timestamps (plain `u64` milliseconds) and poll
//! for debounced reconciliations; state changes are returned as values, never
//! delivered through callbacks. Invalid input is not an error: a rejected
//! parse or a refused commit leaves prior state intact and is recoverable by
//! further edits.
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_model::planner::Planner;
//! use sightline_model::room::RoomField;
//! use sightline_model::screen::ScreenField;
//!
//! let mut planner = Planner::new();
//!
//! // Screen edits debounce for one second; room edits apply synchronously.
//! planner.edit_screen_field(ScreenField::Diagonal, "139.7", 0);
//! assert!(planner.poll(999).is_none());
//! let screen = planner.poll(1_000).unwrap();
//! assert!((screen.width_cm - 121.8).abs() < 0.1);
//!
//! planner.edit_room_field(RoomField::Width, "4.0").unwrap();
//! planner.edit_room_field(RoomField::Depth, "5.0").unwrap();
//! planner.edit_room_field(RoomField::Height, "2.438").unwrap();
//! planner.edit_room_field(RoomField::MountHeight, "100").unwrap();
//!
//! assert!(planner.validate());
//! assert!(planner.snapshot().is_some());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod aspect;
pub mod debounce;
pub mod gate;
pub mod planner;
pub mod room;
pub mod screen;

/// Parses one raw text field edit.
///
/// Empty input means "cleared" and parses as zero. Anything that is not a
/// finite, non-negative decimal number is rejected with `None`; callers leave
/// their state untouched in that case.
pub(crate) fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_field;

    #[test]
    fn empty_input_parses_as_zero() {
        assert_eq!(parse_field(""), Some(0.0));
        assert_eq!(parse_field("   "), Some(0.0));
    }

    #[test]
    fn decimal_input_parses() {
        assert_eq!(parse_field("139.7"), Some(139.7));
        assert_eq!(parse_field(" 2.438 "), Some(2.438));
        assert_eq!(parse_field("0"), Some(0.0));
    }

    #[test]
    fn junk_negative_and_non_finite_are_rejected() {
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("12abc"), None);
        assert_eq!(parse_field("-3"), None);
        assert_eq!(parse_field("NaN"), None);
        assert_eq!(parse_field("inf"), None);
    }
}
