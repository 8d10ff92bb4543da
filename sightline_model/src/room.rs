// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Room dimensions: unit-normalized pass-through state.
//!
//! Room width, depth, and height are entered in meters and stored in
//! centimeters; the screen mount height is entered and stored in centimeters
//! directly. There is no cross-field invariant and no debounce — every
//! accepted keystroke propagates synchronously, and the updated dimensions
//! are returned as the change notification.

use sightline_units::meters_to_cm;

use crate::parse_field;

/// Room measurements, all stored in centimeters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RoomDimensions {
    /// Room width in centimeters.
    pub width_cm: f64,
    /// Room depth in centimeters.
    pub depth_cm: f64,
    /// Room height in centimeters.
    pub height_cm: f64,
    /// Height of the screen's bottom edge above the floor, in centimeters.
    pub mount_height_cm: f64,
}

impl RoomDimensions {
    /// The all-zero initial state.
    pub const ZERO: Self = Self {
        width_cm: 0.0,
        depth_cm: 0.0,
        height_cm: 0.0,
        mount_height_cm: 0.0,
    };

    /// Returns `true` once all four measurements are strictly positive.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.width_cm > 0.0
            && self.depth_cm > 0.0
            && self.height_cm > 0.0
            && self.mount_height_cm > 0.0
    }
}

/// A single editable room field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoomField {
    /// Room width, entered in meters.
    Width,
    /// Room depth, entered in meters.
    Depth,
    /// Room height, entered in meters.
    Height,
    /// Screen mount height, entered in centimeters.
    MountHeight,
}

/// Stateful edit session over a [`RoomDimensions`].
#[derive(Copy, Clone, Debug, Default)]
pub struct RoomPanel {
    dims: RoomDimensions,
}

impl RoomPanel {
    /// Creates a panel with all-zero dimensions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dimensions.
    #[must_use]
    pub fn dimensions(&self) -> RoomDimensions {
        self.dims
    }

    /// Feeds one keystroke on `field`.
    ///
    /// Empty text parses as zero; non-numeric, negative, or non-finite text
    /// returns `None` and leaves the state unchanged. Meter-entered fields
    /// are stored ×100; the mount height is stored verbatim. `Some` carries
    /// the full updated dimensions and doubles as the change notification.
    pub fn edit_field(&mut self, field: RoomField, raw: &str) -> Option<RoomDimensions> {
        let value = parse_field(raw)?;
        match field {
            RoomField::Width => self.dims.width_cm = meters_to_cm(value),
            RoomField::Depth => self.dims.depth_cm = meters_to_cm(value),
            RoomField::Height => self.dims.height_cm = meters_to_cm(value),
            RoomField::MountHeight => self.dims.mount_height_cm = value,
        }
        Some(self.dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_fields_are_stored_in_centimeters() {
        let mut panel = RoomPanel::new();
        let dims = panel.edit_field(RoomField::Height, "2.438").unwrap();
        assert_eq!(dims.height_cm, 243.8);

        panel.edit_field(RoomField::Width, "4").unwrap();
        panel.edit_field(RoomField::Depth, "5.5").unwrap();
        assert_eq!(panel.dimensions().width_cm, 400.0);
        assert_eq!(panel.dimensions().depth_cm, 550.0);
    }

    #[test]
    fn mount_height_is_stored_verbatim() {
        let mut panel = RoomPanel::new();
        let dims = panel.edit_field(RoomField::MountHeight, "100").unwrap();
        assert_eq!(dims.mount_height_cm, 100.0);
    }

    #[test]
    fn rejected_edit_leaves_state_unchanged() {
        let mut panel = RoomPanel::new();
        panel.edit_field(RoomField::Width, "4").unwrap();

        assert_eq!(panel.edit_field(RoomField::Width, "wide"), None);
        assert_eq!(panel.edit_field(RoomField::Width, "-2"), None);
        assert_eq!(panel.dimensions().width_cm, 400.0);
    }

    #[test]
    fn empty_edit_clears_a_field() {
        let mut panel = RoomPanel::new();
        panel.edit_field(RoomField::Depth, "5").unwrap();
        let dims = panel.edit_field(RoomField::Depth, "").unwrap();
        assert_eq!(dims.depth_cm, 0.0);
    }

    #[test]
    fn completeness_requires_all_four_fields() {
        let mut panel = RoomPanel::new();
        panel.edit_field(RoomField::Width, "4").unwrap();
        panel.edit_field(RoomField::Depth, "5").unwrap();
        panel.edit_field(RoomField::Height, "2.4").unwrap();
        assert!(!panel.dimensions().is_complete());

        panel.edit_field(RoomField::MountHeight, "100").unwrap();
        assert!(panel.dimensions().is_complete());
    }
}
